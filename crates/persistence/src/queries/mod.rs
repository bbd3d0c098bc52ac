// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries against the snapshot store.

pub mod snapshots;

pub use snapshots::{find_snapshot, list_periods};

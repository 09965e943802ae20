// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific storage code.
//!
//! - `sqlite` - diesel/`SQLite` single-record table (default)
//! - `file` - a JSON document on disk, replaced atomically
//! - `memory` - a process-local document for tests and ephemeral sessions
//!
//! Reads and writes against the `SQLite` table live in `queries` and
//! `mutations`; this module only holds connection setup and the two
//! non-database backends.

pub mod file;
pub mod memory;
pub mod sqlite;

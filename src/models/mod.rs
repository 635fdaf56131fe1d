// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption and reference frame data structures.

pub mod caption;
pub mod frame;

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for the background image and PNG export.

pub mod export;
pub mod media;

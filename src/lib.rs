// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Visual form builder: an ordered list of field definitions, an editor to
//! shape it, and a live preview of the resulting form.

pub mod app;
pub mod models;
pub mod mvu;
pub mod ui;

//! Unit tests for humanpdf.

mod drag_tests;

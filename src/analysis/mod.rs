//! Plain-text analysis of clipboard payloads.
//!
//! - [`chars`] - Lookup tables for special/invisible characters and bullets
//! - [`report`] - Report builder over plain text and HTML

pub mod chars;
mod report;

pub use chars::{bullet_rank, classify, code_point_label, is_bullet, special_char_name, CharClass};
pub use report::{
    build_analysis, is_ms_office, utf16_len, Analysis, BulletLine, SpecialCharHit,
    MS_OFFICE_MARKER,
};

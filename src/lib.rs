//! # Catalog Resizer
//!
//! Batch resizer for product photography. Photos live in one folder per
//! product; every run writes uniformly sized copies into a mirrored tree,
//! ready for a catalog or web shop.
//!
//! ```text
//! images/shoes/a.jpg  ──(policy)──→  resized-images/shoes/a.jpg
//! ```
//!
//! # Policies
//!
//! | Menu | Policy | Result |
//! |------|--------|--------|
//! | `1` | [`Policy::PadAndCenter`](imaging::Policy) | Product scaled to 65% of the canvas width, centered on white |
//! | `2` | [`Policy::Resize`](imaging::Policy) | Stretched to the canvas size, aspect ratio ignored |
//! | `3` | [`Policy::Smart`](imaging::Policy) | Pad when smaller than the canvas in both dimensions, otherwise stretch |
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Extension filter, canvas geometry, backend trait, per-file transforms |
//! | [`walk`] | One-level directory walk, output mirroring, per-file reporting |
//! | [`menu`] | Interactive prompt loop |
//! | [`activity`] | Append-only `timestamp:LEVEL:message` log passed by reference |
//! | [`config`] | Optional `resizer.toml` merged over stock defaults |
//! | [`output`] | Terminal summaries for finished batches |
//!
//! # Design Decisions
//!
//! ## Values, Not Exceptions, Per File
//!
//! A transform never logs and never aborts a batch. It returns an
//! [`Outcome`](imaging::Outcome) or a [`TransformError`](imaging::TransformError),
//! and the walker decides what to record. One corrupt photo costs one ERROR
//! line, not the rest of the folder.
//!
//! ## Strict Smart Threshold
//!
//! The smart policy pads only when the source is strictly smaller than the
//! canvas in *both* dimensions. A 1200×800 source on a 1200×1200 canvas is
//! stretched.
//!
//! ## Sequential On Purpose
//!
//! Files are processed one at a time, in name order, so the activity log reads
//! top to bottom in the same order as the folders on disk.

pub mod activity;
pub mod config;
pub mod imaging;
pub mod menu;
pub mod output;
pub mod walk;

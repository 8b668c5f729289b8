//! shotframe turns a plain screenshot into a presentation image.
//!
//! The source bitmap is placed on a padded, optionally rounded canvas with a
//! coloured background, an optional drop shadow, grain and faux browser chrome,
//! then exported as PNG. The API is session-oriented:
//!
//! - Build a [`LayoutConfig`] (or deserialize one from JSON)
//! - Create a [`Session`] and [`Session::load_image`]
//! - Read back the [`RenderSurface`] or [`Session::export_png`]
#![forbid(unsafe_code)]

mod foundation;

/// Image decoding into premultiplied bitmaps.
pub mod assets;
/// User-facing controls and colour parsing.
pub mod config;
/// Pixel kernels: blur, compositing, grain.
pub mod effects;
/// PNG and clipboard output.
pub mod export;
/// Card placement and canvas sizing.
pub mod layout;
/// Rasterization and the compositor.
pub mod render;
/// Stateful editing session.
pub mod session;

pub use crate::foundation::core::{
    Affine, BezPath, LogicalSize, Point, Rect, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{ShotError, ShotResult};

pub use crate::assets::decode::{Bitmap, decode_bitmap};
pub use crate::config::color::{Color, SWATCHES};
pub use crate::config::model::{
    Aspect, ChromeTheme, LayoutConfig, Noise, Padding, PaddingPreset, Position, Shadow,
    ShadowParams, ShadowPreset,
};
pub use crate::export::clipboard::copy_to_clipboard;
pub use crate::export::png::{DEFAULT_FILE_NAME, encode_png, write_png};
pub use crate::layout::solver::{CardLayout, compute_layout, compute_layout_within};
pub use crate::render::compositor::{Compositor, RenderSettings};
pub use crate::render::surface::RenderSurface;
pub use crate::session::Session;

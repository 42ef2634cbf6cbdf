//! Rendering for the severe-weather warning module ("Unwetterwarnung").
//!
//! The crate turns a prepared list of [`models::WarningRecord`]s into the
//! module's markup. Everything that happens before rendering (feed retrieval,
//! caching) belongs to the caller; [`view::WarningListView`] only selects the
//! render state, localizes labels and emits the optional auto-refresh hook.
//!
//! ```no_run
//! use unwetter::assets::{AssetManifest, WebAssetRegistry};
//! use unwetter::dates::DateFormatter;
//! use unwetter::language::Language;
//! use unwetter::models::{RenderInput, RenderParams, WarningRecord};
//! use unwetter::view::WarningListView;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let language = Language::builtin("en-GB")?;
//! let dates = DateFormatter::utc();
//! let mut assets = WebAssetRegistry::new(Arc::new(AssetManifest::builtin()?));
//!
//! let input = RenderInput::new("42").with_warnings(vec![WarningRecord {
//!     event: Some("Storm".into()),
//!     ..Default::default()
//! }]);
//! let html = WarningListView::new(&language, &dates)
//!     .render(&input, &RenderParams::default(), &mut assets)?;
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod config;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod language;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;
pub mod view;

#![doc = include_str!("../README.md")]

mod catalog;
mod config;
mod error;
mod event;
mod grid;
mod order;
mod puzzle;
mod session;
mod state;
mod view;
#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::PuzzleCatalog;
pub use config::{InputGranularity, RevealPolicy, SessionConfig};
pub use error::CatalogError;
pub use event::{DragTracker, Key, UiEvent};
pub use grid::GridState;
pub use order::RowOrder;
pub use puzzle::{PuzzleDefinition, PuzzleVariant};
pub use session::{PuzzleSession, Subscriber};
pub use state::{Direction, Selection, SessionState};
pub use view::{CellTone, CellView, RowView, SessionView};
#[cfg(feature = "wasm")]
pub use wasm::WasmSession;

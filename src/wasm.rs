use rand_chacha::ChaCha20Rng;
use wasm_bindgen::prelude::*;

use crate::{Key, PuzzleCatalog, PuzzleSession, SessionConfig, SessionView, UiEvent};

/// Convert a SessionView to a JsValue (plain object tree).
fn view_to_js(view: &SessionView) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(view).map_err(|e| JsError::new(&e.to_string()))
}

/// A puzzle session driven from a web page.
///
/// Every mutating method returns the updated view so the page can re-render
/// straight from the return value.
#[wasm_bindgen]
pub struct WasmSession {
    session: PuzzleSession<ChaCha20Rng>,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session.
    ///
    /// `catalog_json` replaces the built-in puzzles when given. `config` is an
    /// optional object with `reveal_policy`, `input` and `auto_advance` keys.
    /// The `seed` determines row shuffles and hint choices.
    #[wasm_bindgen(constructor)]
    pub fn new(
        seed: u64,
        catalog_json: Option<String>,
        config: JsValue,
    ) -> Result<WasmSession, JsError> {
        let catalog = match catalog_json {
            Some(json) => PuzzleCatalog::from_json(&json)?,
            None => PuzzleCatalog::builtin(),
        };
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?
        };
        Ok(WasmSession {
            session: PuzzleSession::from_seed(catalog, config, seed),
        })
    }

    pub fn view(&self) -> Result<JsValue, JsError> {
        view_to_js(&self.session.view())
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Apply an event object such as `{ type: "cell_edit", row, col, text }`.
    pub fn dispatch(&mut self, event: JsValue) -> Result<JsValue, JsError> {
        let event: UiEvent =
            serde_wasm_bindgen::from_value(event).map_err(|e| JsError::new(&e.to_string()))?;
        self.apply(event)
    }

    #[wasm_bindgen(js_name = cellEdit)]
    pub fn cell_edit(&mut self, row: usize, col: usize, text: String) -> Result<JsValue, JsError> {
        self.apply(UiEvent::CellEdit { row, col, text })
    }

    /// Forward a `KeyboardEvent.key` value pressed on cell `(row, col)`.
    #[wasm_bindgen(js_name = cellKey)]
    pub fn cell_key(&mut self, row: usize, col: usize, key: &str) -> Result<JsValue, JsError> {
        self.apply(UiEvent::CellKey {
            row,
            col,
            key: Key::from_dom(key),
        })
    }

    pub fn focus(&mut self, row: usize, col: usize) -> Result<JsValue, JsError> {
        self.apply(UiEvent::Focus { row, col })
    }

    pub fn blur(&mut self) -> Result<JsValue, JsError> {
        self.apply(UiEvent::Blur)
    }

    pub fn reveal(&mut self, row: usize) -> Result<JsValue, JsError> {
        self.apply(UiEvent::RevealRequest { row })
    }

    pub fn hint(&mut self) -> Result<JsValue, JsError> {
        self.apply(UiEvent::HintRequest)
    }

    pub fn reset(&mut self) -> Result<JsValue, JsError> {
        self.apply(UiEvent::ResetRequest)
    }

    #[wasm_bindgen(js_name = nextPuzzle)]
    pub fn next_puzzle(&mut self) -> Result<JsValue, JsError> {
        self.apply(UiEvent::NextPuzzleRequest)
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, row: usize) -> Result<JsValue, JsError> {
        self.apply(UiEvent::DragStart { row })
    }

    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&mut self, row: usize) -> Result<JsValue, JsError> {
        self.apply(UiEvent::DragOver { row })
    }

    #[wasm_bindgen(js_name = drop)]
    pub fn drop_on(&mut self, row: usize) -> Result<JsValue, JsError> {
        self.apply(UiEvent::Drop { row })
    }

    /// Display row the page should highlight while a drag is in progress.
    #[wasm_bindgen(js_name = dragHover)]
    pub fn drag_hover(&self) -> Option<usize> {
        self.session.drag().hover()
    }
}

impl WasmSession {
    fn apply(&mut self, event: UiEvent) -> Result<JsValue, JsError> {
        self.session.dispatch(event);
        self.view()
    }
}

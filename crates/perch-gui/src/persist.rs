//! Persistence: the serialized title→value map written as a JSON document.
//! A malformed document fails the load and leaves in-memory state
//! untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use perch_core::{PanelError, ParamValue};

use crate::panel::Panel;

impl Panel {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PanelError> {
        let data = self.serialize();
        let text = serde_json::to_string_pretty(&data)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reads and applies a saved document, then signals completion.
    /// Controls whose title is absent from the document keep their value.
    pub fn load(
        &mut self,
        path: impl AsRef<Path>,
        on_done: impl FnOnce(),
    ) -> Result<(), PanelError> {
        let text = fs::read_to_string(path)?;
        let data: BTreeMap<String, ParamValue> = serde_json::from_str(&text)?;
        self.deserialize(&data);
        on_done();
        Ok(())
    }
}

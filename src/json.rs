use serde_json::{Map, Value};

use crate::IsEmpty;

impl IsEmpty for Map<String, Value> {
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

//! Turning values under test into canonical snapshot bytes.
//!
//! Raw byte slices never pass through a renderer; the byte assertion entry
//! points store them as-is, which is what enables binary-format snapshots.
//! Everything else goes through a [`Render`] implementation. The default is
//! [`DebugRender`], a deterministic structural dump; [`JsonRender`] is the
//! substitutable alternate for values with a serde representation.

use std::fmt;

use serde::Serialize;

use crate::errors::SnapError;

/// Capability to render a value into the byte sequence recorded and
/// compared by snapshot assertions. Implementations must be deterministic:
/// structurally identical values render to identical bytes across runs.
pub trait Render<T: ?Sized> {
    fn render(&self, value: &T) -> Result<Vec<u8>, SnapError>;
}

/// Default renderer: the multi-line `{:#?}` structural dump.
///
/// Derived `Debug` output spells out nested fields, types, and values in a
/// stable textual form and contains no memory addresses, so re-runs of
/// structurally identical values produce byte-identical snapshots
/// regardless of allocation. Opaque types degrade to whatever their `Debug`
/// impl chooses to show; rendering itself cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugRender;

impl<T: fmt::Debug + ?Sized> Render<T> for DebugRender {
    fn render(&self, value: &T) -> Result<Vec<u8>, SnapError> {
        let mut dump = format!("{:#?}", value);
        dump.push('\n');
        Ok(dump.into_bytes())
    }
}

/// Alternate renderer: pretty-printed JSON via serde.
///
/// Fails for values serde cannot represent (e.g. maps with non-string
/// keys); the engine treats that as fatal to the assertion.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRender;

impl<T: Serialize + ?Sized> Render<T> for JsonRender {
    fn render(&self, value: &T) -> Result<Vec<u8>, SnapError> {
        let mut bytes = serde_json::to_vec_pretty(value)
            .map_err(|source| SnapError::Serialize { source })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Inventory {
        name: &'static str,
        items: Vec<&'static str>,
    }

    fn sample() -> Inventory {
        Inventory {
            name: "satchel",
            items: vec!["rope", "lantern"],
        }
    }

    #[test]
    fn debug_render_is_deterministic() {
        let first = DebugRender.render(&sample()).unwrap();
        let second = DebugRender.render(&sample()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn debug_render_spells_out_structure() {
        let bytes = DebugRender.render(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Inventory"));
        assert!(text.contains("\"satchel\""));
        assert!(text.contains("\"lantern\""));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn json_render_produces_pretty_json() {
        let bytes = JsonRender.render(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"name\": \"satchel\""));
        assert!(text.ends_with('\n'));
    }
}

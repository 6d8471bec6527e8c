pub mod device;
pub mod document;
pub mod emitter;
pub mod error;
pub mod id;
pub mod layout;
pub mod lint;
pub mod model;
pub mod navigator;
pub mod tokens;

pub use device::{DEVICES, DeviceConfig, device_by_id};
pub use document::{decode_document, parse_document};
pub use emitter::{emit_document, format_document};
pub use error::{DocumentError, DocumentResult};
pub use id::WidgetId;
pub use lint::{LintDiagnostic, LintSeverity, lint_document};
pub use model::*;
pub use navigator::{children_of, depth_first};

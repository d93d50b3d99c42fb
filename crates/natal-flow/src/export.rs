//! Image-export collaborator contract.
//!
//! Rendering the result view to a PNG is an external capability; this
//! module only fixes the call contract: hand the exporter a view region,
//! get PNG bytes back, name the download after the current date. Export is
//! best-effort — failure is reported and leaves the session untouched.

use chrono::NaiveDate;
use tracing::warn;

use natal_core::errors::ExportError;

/// Opaque descriptor of the renderable view region to rasterize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// Identifier of the view node holding the result.
    pub region_id: String,
    pub width: u32,
    pub height: u32,
}

/// Collaborator capable of turning a view region into a PNG.
pub trait ViewExporter {
    fn render_png(&self, view: &RenderedView) -> Result<Vec<u8>, ExportError>;
}

/// A finished export, ready to offer for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Download name for an exported result, carrying the export date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("birth-style-result_{}.png", date.format("%Y-%m-%d"))
}

/// Run an export against a collaborator. On failure the error is logged and
/// returned as-is; the already-computed result is unaffected either way.
pub fn export_result(
    exporter: &dyn ViewExporter,
    view: &RenderedView,
    date: NaiveDate,
) -> Result<ExportedImage, ExportError> {
    match exporter.render_png(view) {
        Ok(bytes) => Ok(ExportedImage {
            file_name: export_file_name(date),
            bytes,
        }),
        Err(error) => {
            warn!(region = %view.region_id, %error, "result export failed");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_carries_the_export_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "birth-style-result_2025-03-09.png");
    }
}

//! Rasterisation: render the first PDF page to pixels via pdfium and encode
//! the output image.
//!
//! ## Scale, not target size
//!
//! PDF user space runs at 72 points per inch, so a requested DPI maps to a
//! uniform scale factor of `dpi / 72` on both axes. Scaling (rather than
//! fixing a target pixel size) means the output dimensions track the
//! standalone class's tightly-cropped page: a small diagram yields a small
//! image, a large one a large image, both at the same density.
//!
//! ## First page only
//!
//! A standalone TikZ document compiles to a single page; documents that
//! somehow produce more are unsupported and only page 1 is rendered.

use crate::error::RenderError;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

/// Render page 1 of `pdf_path` at `scale` and save it to `output_path` in
/// the format implied by that path's extension.
///
/// Returns the output image dimensions in pixels.
pub fn rasterise_first_page(
    pdf_path: &Path,
    output_path: &Path,
    scale: f32,
) -> Result<(u32, u32), RenderError> {
    let pdfium = bind_pdfium()?;

    let document =
        pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| RenderError::RasterisationFailed {
                path: pdf_path.to_path_buf(),
                detail: format!("{:?}", e),
            })?;

    let pages = document.pages();
    if pages.len() == 0 {
        return Err(RenderError::RasterisationFailed {
            path: pdf_path.to_path_buf(),
            detail: "compiled document has no pages".into(),
        });
    }
    if pages.len() > 1 {
        warn!(
            "Compiled document has {} pages; rendering page 1 only",
            pages.len()
        );
    }

    let page = pages.get(0).map_err(|e| RenderError::RasterisationFailed {
        path: pdf_path.to_path_buf(),
        detail: format!("{:?}", e),
    })?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(scale);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| RenderError::RasterisationFailed {
            path: pdf_path.to_path_buf(),
            detail: format!("{:?}", e),
        })?;

    // Drop the alpha channel: the page background is opaque and RGB keeps
    // JPEG and other alpha-less encoders on the table.
    let image = bitmap.as_image().to_rgb8();
    let (width, height) = image.dimensions();
    debug!("Rendered page 1 → {}x{} px at scale {:.3}", width, height, scale);

    image.save(output_path).map_err(|e| match e {
        image::ImageError::Unsupported(_) => RenderError::UnsupportedFormat {
            path: output_path.to_path_buf(),
        },
        other => RenderError::OutputWriteFailed {
            path: output_path.to_path_buf(),
            detail: other.to_string(),
        },
    })?;

    Ok((width, height))
}

/// Bind to a pdfium library: one next to the executable first, then the
/// system-wide install.
fn bind_pdfium() -> Result<Pdfium, RenderError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| RenderError::PdfiumBindingFailed(format!("{:?}", e)))
}

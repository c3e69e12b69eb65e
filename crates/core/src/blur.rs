use std::path::Path;

use image::RgbaImage;

use crate::error::BlurError;
use crate::gaussian;
use crate::region::Region;

const CHANNELS: usize = 4;

/// Blur `regions` of the image at `input` and write the result to `output`.
///
/// The image is loaded once; the output format is inferred from the
/// `output` extension. Any failure aborts before the output file is
/// written.
pub fn blur_regions(input: &Path, output: &Path, regions: &[Region]) -> Result<(), BlurError> {
    let source = image::open(input)
        .map_err(|source| BlurError::Open {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let result = blur_regions_in(&source, regions)?;

    result.save(output).map_err(|source| BlurError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// In-memory counterpart of [`blur_regions`].
///
/// Every region is cropped from the pristine `source`, so regions do not
/// compound on each other; where regions overlap, the later-listed one
/// overwrites the earlier.
pub fn blur_regions_in(source: &RgbaImage, regions: &[Region]) -> Result<RgbaImage, BlurError> {
    let width = source.width() as usize;
    let mut result = source.clone();
    let mut roi: Vec<u8> = Vec::new();
    let mut temp: Vec<f32> = Vec::new();

    for region in regions {
        region.validate(source.width(), source.height())?;

        let rx = region.left as usize;
        let ry = region.top as usize;
        let rw = region.width() as usize;
        let rh = region.height() as usize;
        log::debug!(
            "blurring {rw}x{rh} region at ({rx}, {ry}) with radius {}",
            region.radius
        );

        // Crop from the pristine source (reuse buffer across regions)
        let src = source.as_raw();
        roi.resize(rw * rh * CHANNELS, 0);
        for row in 0..rh {
            let src_offset = ((ry + row) * width + rx) * CHANNELS;
            let dst_offset = row * rw * CHANNELS;
            roi[dst_offset..dst_offset + rw * CHANNELS]
                .copy_from_slice(&src[src_offset..src_offset + rw * CHANNELS]);
        }

        let kernel = gaussian::kernel_1d(region.radius);
        gaussian::blur_with_kernel(&mut roi, rw, rh, CHANNELS, &kernel, &mut temp);

        // Paste into the result buffer at the same coordinates
        let dst: &mut [u8] = &mut result;
        for row in 0..rh {
            let dst_offset = ((ry + row) * width + rx) * CHANNELS;
            let src_offset = row * rw * CHANNELS;
            dst[dst_offset..dst_offset + rw * CHANNELS]
                .copy_from_slice(&roi[src_offset..src_offset + rw * CHANNELS]);
        }
    }

    Ok(result)
}

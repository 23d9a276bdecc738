use tracing::debug;

use crate::energy_pipeline::gray::GrayImageData;

/// Binarization cutoff: intensities above this are foreground.
const FOREGROUND_THRESHOLD: u8 = 127;

const M2_PER_KM2: f64 = 1_000_000.0;

/// Estimates the mapped area in km² from image geometry alone: the image is
/// binarized and the largest 4-connected foreground component is taken as
/// the mapped region, scaled by the ground resolution in meters per pixel.
/// Returns `None` when no pixel clears the cutoff.
pub fn estimate_area_km2(image: &GrayImageData, x_res_m: f64, y_res_m: f64) -> Option<f64> {
    let component_size = largest_component_size(image)?;

    debug!(
        "Largest foreground component: {} of {} pixels",
        component_size,
        image.pixel_count()
    );

    Some(component_size as f64 * x_res_m * y_res_m / M2_PER_KM2)
}

fn largest_component_size(image: &GrayImageData) -> Option<u64> {
    let width = image.width as usize;
    let height = image.height as usize;
    if width == 0 || height == 0 {
        return None;
    }

    let mut visited = vec![false; width * height];
    let mut largest = 0u64;

    for start in 0..width * height {
        if visited[start] || image.pixels[start] <= FOREGROUND_THRESHOLD {
            continue;
        }

        // Grow the component from this seed over the 4-neighborhood.
        let mut queue = vec![start];
        visited[start] = true;
        let mut size = 0u64;

        while let Some(index) = queue.pop() {
            size += 1;
            let x = (index % width) as i64;
            let y = (index / width) as i64;

            for (dx, dy) in &[(0i64, 1i64), (0, -1), (1, 0), (-1, 0)] {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= width as i64 || ny < 0 || ny >= height as i64 {
                    continue;
                }

                let neighbor = ny as usize * width + nx as usize;
                if !visited[neighbor] && image.pixels[neighbor] > FOREGROUND_THRESHOLD {
                    visited[neighbor] = true;
                    queue.push(neighbor);
                }
            }
        }

        largest = largest.max(size);
    }

    if largest == 0 { None } else { Some(largest) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from_rows(rows: &[&[u8]]) -> GrayImageData {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        GrayImageData {
            width,
            height,
            pixels: rows.concat(),
        }
    }

    #[test]
    fn all_dark_image_has_no_estimate() {
        let image = image_from_rows(&[&[0, 50, 100], &[127, 30, 0]]);
        assert_eq!(estimate_area_km2(&image, 1.0, 1.0), None);
    }

    #[test]
    fn largest_component_wins() {
        // Two components: a 1-pixel speck and a 3-pixel strip.
        let image = image_from_rows(&[
            &[255, 0, 200, 200],
            &[0, 0, 0, 200],
            &[0, 0, 0, 0],
        ]);
        let area = estimate_area_km2(&image, 1.0, 1.0).unwrap();
        assert!((area - 3.0 / 1_000_000.0).abs() < 1e-15);
    }

    #[test]
    fn diagonal_pixels_are_separate_components() {
        let image = image_from_rows(&[&[255, 0], &[0, 255]]);
        let area = estimate_area_km2(&image, 1.0, 1.0).unwrap();
        assert!((area - 1.0 / 1_000_000.0).abs() < 1e-15);
    }

    #[test]
    fn resolution_scales_the_estimate() {
        let image = image_from_rows(&[&[255, 255], &[255, 255]]);
        // 4 pixels at 500m x 500m each = 1 km².
        let area = estimate_area_km2(&image, 500.0, 500.0).unwrap();
        assert!((area - 1.0).abs() < 1e-12);
    }
}

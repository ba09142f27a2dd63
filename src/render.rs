//! Debug rendering of a hierarchy's x/y projection.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::bvh::Bvh;
use crate::scalar::{Scalar, to_measure};
use crate::volume::Volume;

impl<T: Scalar, V: Volume<T, N>, const N: usize> Bvh<T, V, N> {
    /// Draw the outline of every node's projected bounding box into a PNG
    /// at `path`. Color varies with node depth so the nesting reads at a
    /// glance. Requires at least two dimensions; the first two are drawn.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error when the image cannot be written.
    pub fn render<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let Some(root) = self.volume() else {
            return RgbaImage::new(1, 1).save(path);
        };

        let origin = root.point();
        let extent = root.extent();
        let x0 = to_measure(origin[0]).floor();
        let y0 = to_measure(origin[1]).floor();
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = (to_measure(extent[0]).ceil() as u32).max(1) + 2;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = (to_measure(extent[1]).ceil() as u32).max(1) + 2;
        let mut img = RgbaImage::new(width, height);

        for node in self.iter() {
            let Some(vol) = node.volume() else { continue };
            let depth = node.depth();
            #[expect(clippy::cast_possible_truncation)]
            let color = Rgba([
                (255 / (depth + 1)) as u8,
                (255 / (2 * depth + 1)) as u8,
                255,
                255,
            ]);

            let point = vol.point();
            let delta = vol.extent();
            #[expect(clippy::cast_possible_truncation)]
            let x_start = (to_measure(point[0]) - x0).round() as i64;
            #[expect(clippy::cast_possible_truncation)]
            let y_start = (to_measure(point[1]) - y0).round() as i64;
            #[expect(clippy::cast_possible_truncation)]
            let x_end = x_start + to_measure(delta[0]).round() as i64;
            #[expect(clippy::cast_possible_truncation)]
            let y_end = y_start + to_measure(delta[1]).round() as i64;

            for y in y_start..y_end {
                put(&mut img, x_start, y, color);
                put(&mut img, x_end - 1, y, color);
            }
            for x in x_start..x_end {
                put(&mut img, x, y_start, color);
                put(&mut img, x, y_end - 1, color);
            }
        }

        img.save(path)
    }
}

/// Set a pixel, ignoring coordinates that round outside the canvas.
fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        img.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use crate::bvh::tests::{Tree2, ten_leaves};

    #[test]
    fn test_render_writes_png() {
        let leaves = ten_leaves();
        let mut tree = Tree2::new();
        for leaf in &leaves {
            tree.add(leaf.clone());
        }

        let path = std::env::temp_dir().join("dynbvh_render_test.png");
        tree.render(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        // PNG signature.
        assert_eq!(&written[..8], b"\x89PNG\r\n\x1a\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = Tree2::new();
        let path = std::env::temp_dir().join("dynbvh_render_empty_test.png");
        tree.render(&path).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}

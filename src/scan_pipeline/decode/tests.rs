#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use crate::scan_pipeline::common::error::FailureReason;
    use crate::scan_pipeline::decode::{
        DEFAULT_MAX_INPUT_BYTES, LeafImageFormat, LeafImageReader, StandardImageReader,
        UploadQuality, validate_input_size,
    };

    fn encode_png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_format_from_mime() {
        assert_eq!(LeafImageFormat::from_mime("image/jpg").unwrap(), LeafImageFormat::Jpeg);
        assert_eq!(LeafImageFormat::from_mime("image/JPEG").unwrap(), LeafImageFormat::Jpeg);
        assert_eq!(LeafImageFormat::from_mime("image/webp").unwrap(), LeafImageFormat::Webp);

        let err = LeafImageFormat::from_mime("image/gif").unwrap_err();
        assert!(matches!(err.reason(), Some(FailureReason::UnsupportedFormat(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(LeafImageFormat::from_path(Path::new("leaf.PNG")).unwrap(), LeafImageFormat::Png);
        assert_eq!(LeafImageFormat::from_path(Path::new("a/b.jpeg")).unwrap(), LeafImageFormat::Jpeg);
        assert!(LeafImageFormat::from_path(Path::new("leaf.bmp")).is_err());
        assert!(LeafImageFormat::from_path(Path::new("leaf")).is_err());
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_input_size(DEFAULT_MAX_INPUT_BYTES, DEFAULT_MAX_INPUT_BYTES).is_ok());
        let err = validate_input_size(DEFAULT_MAX_INPUT_BYTES + 1, DEFAULT_MAX_INPUT_BYTES).unwrap_err();
        assert!(matches!(err.reason(), Some(FailureReason::InputTooLarge { .. })));
    }

    #[test]
    fn test_decode_png() {
        let bytes = encode_png(6, 4, [0, 180, 0, 255]);
        let raster = StandardImageReader.read_image(&bytes, LeafImageFormat::Png).unwrap();

        assert_eq!((raster.width(), raster.height()), (6, 4));
        assert!(raster.pixels().iter().all(|p| *p == [0, 180, 0, 255]));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = StandardImageReader
            .read_image(b"definitely not a png", LeafImageFormat::Png)
            .unwrap_err();
        assert!(matches!(err.reason(), Some(FailureReason::Undecodable(_))));
    }

    #[test]
    fn test_upload_quality() {
        let square = UploadQuality::assess(800, 600);
        assert!(square.is_high_quality);
        assert!(square.has_good_aspect);
        assert!(square.is_ready());
        assert_eq!(square.resolution, 480_000);

        let small = UploadQuality::assess(300, 300);
        assert!(!small.is_high_quality);
        assert!(!small.is_ready());

        let banner = UploadQuality::assess(1600, 500);
        assert!(banner.is_high_quality);
        assert!(!banner.has_good_aspect);
    }
}

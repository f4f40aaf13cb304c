#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::scan_pipeline::raster::RasterBuffer;
    use crate::scan_pipeline::scan::ScanConfig;
    use crate::scan_pipeline::tiff::{RasterWriter, StandardTiffWriter, TiffCompression};

    fn round_trip(compression: TiffCompression, predictor: Option<u16>) {
        let mut pixels = Vec::new();
        for y in 0..6u8 {
            for x in 0..7u8 {
                pixels.push([x * 30, y * 40, 90, 255]);
            }
        }
        let raster = RasterBuffer::new(7, 6, pixels).unwrap();
        let config = ScanConfig::builder()
            .compression(compression)
            .predictor(predictor)
            .build();

        let mut encoded = Vec::new();
        StandardTiffWriter
            .write_raster(&raster, &mut encoded, &config)
            .unwrap();

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(encoded)).unwrap();
        assert_eq!(decoder.dimensions().unwrap(), (7, 6));
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U8(data) => {
                assert_eq!(data, raster.into_rgba_bytes());
            }
            other => panic!("unexpected sample type: {:?}", std::mem::discriminant(&other)),
        }
    }

    #[test]
    fn test_uncompressed_export() {
        round_trip(TiffCompression::None, None);
    }

    #[test]
    fn test_lzw_with_predictor_export() {
        round_trip(TiffCompression::Lzw, Some(2));
    }
}


//! Reads the position from the selected photo's EXIF GPS tags.

use crate::domain::{Coordinates, DomainError, SelectedFile};
use crate::ports::LocationPort;
use exif::{In, Reader, Tag, Value};
use std::io::Cursor;
use tracing::{debug, warn};

/// Location provider backed by the photo's own geotag.
pub struct ExifLocation;

impl ExifLocation {
    fn read(bytes: &[u8]) -> Result<Coordinates, DomainError> {
        let mut cursor = Cursor::new(bytes);
        let exif = Reader::new()
            .read_from_container(&mut cursor)
            .map_err(|e| DomainError::LocationDenied(format!("no EXIF data: {}", e)))?;

        let latitude = Self::coordinate(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, 'S')?;
        let longitude = Self::coordinate(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, 'W')?;
        Ok(Coordinates::new(latitude, longitude))
    }

    fn coordinate(
        exif: &exif::Exif,
        value_tag: Tag,
        ref_tag: Tag,
        negative_ref: char,
    ) -> Result<f64, DomainError> {
        let field = exif
            .get_field(value_tag, In::PRIMARY)
            .ok_or_else(|| DomainError::LocationDenied("photo has no GPS tags".to_string()))?;
        let degrees = match &field.value {
            Value::Rational(parts) => {
                let parts: Vec<f64> = parts.iter().map(|r| r.to_f64()).collect();
                dms_to_degrees(&parts)
            }
            _ => None,
        }
        .ok_or_else(|| DomainError::LocationDenied(format!("malformed {}", value_tag)))?;

        let negative = exif
            .get_field(ref_tag, In::PRIMARY)
            .and_then(|f| match &f.value {
                Value::Ascii(chunks) => chunks.first().and_then(|c| c.first().copied()),
                _ => None,
            })
            .map(|b| (b as char).eq_ignore_ascii_case(&negative_ref))
            .unwrap_or(false);

        Ok(if negative { -degrees } else { degrees })
    }
}

/// Degrees/minutes/seconds (any prefix of the three) to decimal degrees.
pub fn dms_to_degrees(parts: &[f64]) -> Option<f64> {
    if parts.is_empty() || parts.iter().any(|p| !p.is_finite()) {
        return None;
    }
    let deg = parts[0];
    let min = parts.get(1).copied().unwrap_or(0.0);
    let sec = parts.get(2).copied().unwrap_or(0.0);
    Some(deg + min / 60.0 + sec / 3600.0)
}

#[async_trait::async_trait]
impl LocationPort for ExifLocation {
    async fn current_position(
        &self,
        photo: Option<&SelectedFile>,
    ) -> Result<Coordinates, DomainError> {
        let photo = photo.ok_or_else(|| {
            DomainError::LocationDenied("select a geotagged photo first".to_string())
        })?;
        match Self::read(&photo.bytes) {
            Ok(coords) => {
                debug!(file = %photo.filename, coords = %coords, "position from EXIF");
                Ok(coords)
            }
            Err(e) => {
                warn!(file = %photo.filename, error = %e, "no usable geotag");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_to_degrees() {
        let d = dms_to_degrees(&[37.0, 46.0, 29.64]).unwrap();
        assert!((d - 37.774_9).abs() < 1e-4);
        assert_eq!(dms_to_degrees(&[12.5]), Some(12.5));
        assert_eq!(dms_to_degrees(&[]), None);
        assert_eq!(dms_to_degrees(&[f64::NAN, 1.0]), None);
    }

    /// TIFF blob carrying only the four GPS position tags.
    fn geotagged_tiff(
        lat: [(u32, u32); 3],
        lat_ref: &str,
        lon: [(u32, u32); 3],
        lon_ref: &str,
    ) -> Vec<u8> {
        let rational = |parts: [(u32, u32); 3]| {
            Value::Rational(
                parts
                    .iter()
                    .map(|&(num, denom)| exif::Rational { num, denom })
                    .collect(),
            )
        };
        let fields = [
            exif::Field {
                tag: Tag::GPSLatitudeRef,
                ifd_num: In::PRIMARY,
                value: Value::Ascii(vec![lat_ref.as_bytes().to_vec()]),
            },
            exif::Field {
                tag: Tag::GPSLatitude,
                ifd_num: In::PRIMARY,
                value: rational(lat),
            },
            exif::Field {
                tag: Tag::GPSLongitudeRef,
                ifd_num: In::PRIMARY,
                value: Value::Ascii(vec![lon_ref.as_bytes().to_vec()]),
            },
            exif::Field {
                tag: Tag::GPSLongitude,
                ifd_num: In::PRIMARY,
                value: rational(lon),
            },
        ];
        let mut writer = exif::experimental::Writer::new();
        for field in &fields {
            writer.push_field(field);
        }
        let mut out = Cursor::new(Vec::new());
        writer.write(&mut out, false).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn test_southern_western_geotag_is_negated() {
        // 33°52'0" S, 151°12'36" W
        let bytes = geotagged_tiff(
            [(33, 1), (52, 1), (0, 1)],
            "S",
            [(151, 1), (12, 1), (36, 1)],
            "W",
        );
        let photo = SelectedFile::new("harbour.tif", "image/tiff", bytes);

        let coords = ExifLocation.current_position(Some(&photo)).await.unwrap();

        assert!((coords.latitude + 33.866_667).abs() < 1e-5);
        assert!((coords.longitude + 151.21).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_northern_eastern_geotag_stays_positive() {
        // 0°20'51.36" N, 32°34'57.72" E
        let bytes = geotagged_tiff(
            [(0, 1), (20, 1), (5136, 100)],
            "N",
            [(32, 1), (34, 1), (5772, 100)],
            "E",
        );
        let photo = SelectedFile::new("kampala.tif", "image/tiff", bytes);

        let coords = ExifLocation.current_position(Some(&photo)).await.unwrap();

        assert!((coords.latitude - 0.3476).abs() < 1e-4);
        assert!((coords.longitude - 32.5827).abs() < 1e-4);
    }

    #[tokio::test]
    async fn test_no_photo_is_denied() {
        let err = ExifLocation.current_position(None).await.unwrap_err();
        assert!(matches!(err, DomainError::LocationDenied(_)));
    }

    #[tokio::test]
    async fn test_photo_without_exif_is_denied() {
        let photo = SelectedFile::new("plain.jpg", "image/jpeg", b"definitely not a jpeg".to_vec());
        let err = ExifLocation.current_position(Some(&photo)).await.unwrap_err();
        assert!(matches!(err, DomainError::LocationDenied(_)));
    }
}

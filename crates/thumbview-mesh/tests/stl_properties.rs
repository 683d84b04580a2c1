//! Property tests for STL bounds.

use glam::DVec3;
use proptest::prelude::*;
use thumbview_core::BoundingBox;
use thumbview_mesh::{stl_bounds_from_bytes, stl_stats_from_bytes};

/// Encodes triangles as a binary STL with the given header text.
fn binary_stl(header: &[u8], triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut data = vec![b' '; 80];
    data[..header.len()].copy_from_slice(header);
    data.extend_from_slice(&u32::try_from(triangles.len()).unwrap().to_le_bytes());
    for tri in triangles {
        data.extend_from_slice(&[0u8; 12]);
        for v in tri {
            for c in v {
                data.extend_from_slice(&c.to_le_bytes());
            }
        }
        data.extend_from_slice(&[0u8; 2]);
    }
    data
}

fn triangles() -> impl Strategy<Value = Vec<[[f32; 3]; 3]>> {
    prop::collection::vec(
        prop::array::uniform3(prop::array::uniform3(-1.0e3f32..1.0e3)),
        1..10,
    )
}

fn expected_bounds(triangles: &[[[f32; 3]; 3]]) -> BoundingBox {
    BoundingBox::from_points(
        triangles
            .iter()
            .flatten()
            .map(|v| DVec3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]))),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_binary_bounds_match_vertices(triangles in triangles()) {
        let bounds = stl_bounds_from_bytes(&binary_stl(b"binary", &triangles)).unwrap();
        prop_assert_eq!(bounds, expected_bounds(&triangles));
    }

    #[test]
    fn prop_solid_header_with_padding_is_binary(
        triangles in triangles(),
        padding in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut data = binary_stl(b"solid exporter", &triangles);
        data.extend_from_slice(&padding);
        let stats = stl_stats_from_bytes(&data).unwrap();
        prop_assert_eq!(stats.triangles, triangles.len());
        prop_assert_eq!(stats.bounds, expected_bounds(&triangles));
    }
}

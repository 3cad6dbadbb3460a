use spatio_geohash::{
    Config, Direction, Encoder, GeohashError, Precision, cell_dimensions, compute::ALPHABET,
    decode, decode_bbox, encode, must_neighbor, must_neighbors, neighbor, neighbor_at, neighbors,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test 1: Antimeridian and poles wrap around
#[test]
fn test_wraparound_at_extremes() {
    init_logging();

    // The north neighbor of a polar cell lands on the south pole with the
    // same longitude, it is not reflected across the pole.
    assert_eq!(
        neighbors("zzzzz").unwrap(),
        ["pbpbp", "00000", "bpbpb", "bpbp8", "zzzzx", "zzzzw", "zzzzy", "pbpbn"]
    );
    assert_eq!(
        neighbors("0").unwrap(),
        ["2", "3", "1", "c", "b", "z", "p", "r"]
    );
    assert_eq!(
        must_neighbors("z"),
        ["p", "0", "b", "8", "x", "w", "y", "n"]
    );
}

/// Test 2: Round trip stays within half a cell
#[test]
fn test_round_trip_error_bound() {
    init_logging();

    let points = [
        (0.0, 0.0),
        (37.7749, -122.4194),
        (-33.8688, 151.2093),
        (51.5074, -0.1278),
        (-89.999, 179.999),
        (89.999, -179.999),
        (90.0, 180.0),
        (-90.0, -180.0),
    ];

    for (lat, lon) in points {
        for precision in Precision::ALL {
            let hash = encode(lat, lon, precision.len()).expect("encode failed");
            assert_eq!(hash.len(), precision.len());

            let (dlat, dlon) = cell_dimensions(precision);
            let (got_lat, got_lon) = decode(&hash).expect("decode failed");
            assert!((got_lat - lat).abs() <= dlat / 2.0, "{hash} lat");
            assert!((got_lon - lon).abs() <= dlon / 2.0, "{hash} lon");
        }
    }
}

/// Test 3: Global cells have a 22.5 degree half width
#[test]
fn test_global_cell_half_width() {
    let (dlat, dlon) = cell_dimensions(Precision::Global);
    assert_eq!(dlat / 2.0, 22.5);
    assert_eq!(dlon / 2.0, 22.5);
}

/// Test 4: Every emitted character belongs to the alphabet
#[test]
fn test_alphabet_closure() {
    let mut lat = -90.0;
    while lat <= 90.0 {
        let mut lon = -180.0;
        while lon <= 180.0 {
            let hash = encode(lat, lon, 12).expect("encode failed");
            assert!(hash.bytes().all(|b| ALPHABET.contains(&b)), "{hash}");
            lon += 7.3;
        }
        lat += 4.1;
    }

    for bad in ["a", "9i", "l0", "o", "9Q8", " 9", "9-"] {
        assert!(
            matches!(decode(bad), Err(GeohashError::InvalidHashFormat(_))),
            "{bad:?}"
        );
        assert!(matches!(
            neighbor(bad, Direction::N),
            Err(GeohashError::InvalidHashFormat(_))
        ));
    }
}

/// Test 5: Bounding boxes contain their center
#[test]
fn test_bbox_contains_center() {
    for hash in ["0", "z", "s0000", "9q8yy", "kpbpbp", "u4pruydqqvj", "zzzzzzzzzzzz"] {
        let (lat, lon, bbox) = decode_bbox(hash).expect("decode_bbox failed");
        assert!(bbox.min_latitude <= bbox.max_latitude);
        assert!(bbox.min_longitude <= bbox.max_longitude);
        assert!(bbox.min_latitude < lat && lat < bbox.max_latitude, "{hash}");
        assert!(bbox.min_longitude < lon && lon < bbox.max_longitude, "{hash}");
        assert!(bbox.contains(&bbox.center()));
    }
}

/// Test 6: North then south returns to the origin away from the poles
#[test]
fn test_neighbor_symmetry() {
    for hash in ["9q8yy", "u4pruydqqvj", "s0000", "00000", "zzzzz"] {
        let north = neighbor(hash, Direction::N).unwrap();
        assert_eq!(neighbor(&north, Direction::S).unwrap(), hash);

        let east = must_neighbor(hash, Direction::E);
        assert_eq!(must_neighbor(&east, Direction::W), hash);
    }

    for direction in Direction::ALL {
        let there = neighbor("9q8yyk8y", direction).unwrap();
        assert_eq!(neighbor(&there, direction.opposite()).unwrap(), "9q8yyk8y");
    }
}

/// Test 7: Raw direction ordinals
#[test]
fn test_direction_ordinals() {
    init_logging();

    let all = neighbors("9q8yy").unwrap();
    for (idx, expected) in all.iter().enumerate() {
        assert_eq!(&neighbor_at("9q8yy", idx).unwrap(), expected);
    }
    assert_eq!(
        neighbor_at("9q8yy", 8),
        Err(GeohashError::DirectionOutOfRange(8))
    );
    assert_eq!(
        neighbor_at("9q8yy!", 8),
        Err(GeohashError::InvalidHashFormat('!'))
    );
}

/// Test 8: Operations are deterministic
#[test]
fn test_determinism() {
    let first = (
        encode(-33.8688, 151.2093, 9).unwrap(),
        decode_bbox("r3gx2f9tt").unwrap(),
        neighbors("r3gx2f9tt").unwrap(),
    );
    for _ in 0..10 {
        assert_eq!(encode(-33.8688, 151.2093, 9).unwrap(), first.0);
        assert_eq!(decode_bbox("r3gx2f9tt").unwrap(), first.1);
        assert_eq!(neighbors("r3gx2f9tt").unwrap(), first.2);
    }
}

/// Test 9: Non-ASCII input
#[test]
fn test_non_ascii_hashes() {
    assert_eq!(decode("9é"), Err(GeohashError::InvalidHashFormat('é')));
    // Length is measured in bytes
    assert_eq!(
        decode("éééééé9"),
        Err(GeohashError::InvalidHashLength(13))
    );
}

/// Test 10: Concurrent use from several threads
#[test]
fn test_concurrent_encoding() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let lat = -60.0 + f64::from(i) * 30.0;
                let hash = encode(lat, 10.0, 8).unwrap();
                (hash.clone(), neighbors(&hash).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (hash, around) = handle.join().expect("thread panicked");
        assert_eq!(around, neighbors(&hash).unwrap());
    }
}

/// Test 11: Configured encoder loaded from JSON
#[test]
fn test_encoder_from_json_config() {
    init_logging();

    let config = Config::from_json(r#"{ "precision": 5, "clamp_coordinates": true }"#)
        .expect("config should parse");
    let encoder = Encoder::new(config).expect("config should be valid");

    assert_eq!(encoder.precision(), Precision::City);
    assert_eq!(encoder.encode(37.7749, -122.4194).unwrap(), "9q8yy");
    assert_eq!(encoder.encode(95.0, 200.0).unwrap(), "zzzzz");
}

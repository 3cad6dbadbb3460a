//! Bit interleaving of latitude and longitude codes.
//!
//! Geohash puts longitude on the even positions counted from the most
//! significant bit (position 0) and latitude on the odd ones.

/// Merge two axis codes into one `total_bits` wide code.
///
/// `lon_bits` must hold `(total_bits + 1) / 2` bits and `lat_bits`
/// `total_bits / 2` bits, both right-aligned.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::interleave::interlace;
///
/// // lon 001, lat 10 -> 0 1 0 0 1
/// assert_eq!(interlace(0b10, 0b001, 5), 0b01001);
/// ```
pub fn interlace(lat_bits: u64, lon_bits: u64, total_bits: usize) -> u64 {
    debug_assert!(total_bits <= u64::BITS as usize);

    let lon_count = total_bits.div_ceil(2);
    let lat_count = total_bits / 2;

    let mut combined: u64 = 0;
    for i in 0..total_bits {
        combined <<= 1;

        combined |= if i % 2 == 0 {
            (lon_bits >> (lon_count - 1 - i / 2)) & 1
        } else {
            (lat_bits >> (lat_count - 1 - i / 2)) & 1
        };
    }

    combined
}

/// Split a `total_bits` wide code back into `(lat_bits, lon_bits)`.
pub fn split(combined: u64, total_bits: usize) -> (u64, u64) {
    debug_assert!(total_bits <= u64::BITS as usize);

    let mut lat_bits: u64 = 0;
    let mut lon_bits: u64 = 0;

    for i in 0..total_bits {
        let bit = (combined >> (total_bits - 1 - i)) & 1;

        if i % 2 == 0 {
            lon_bits = (lon_bits << 1) | bit;
        } else {
            lat_bits = (lat_bits << 1) | bit;
        }
    }

    (lat_bits, lon_bits)
}

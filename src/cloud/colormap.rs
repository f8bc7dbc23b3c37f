//! Viridis color palette
//!
//! Sixteen evenly spaced samples of the matplotlib viridis colormap.
//! Word colors are drawn from this table by the layout's deterministic
//! generator.

/// RGB samples, dark purple to yellow
pub const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 26, 108],
    [71, 47, 125],
    [65, 68, 135],
    [57, 86, 140],
    [49, 104, 142],
    [42, 120, 142],
    [35, 136, 142],
    [31, 152, 139],
    [34, 168, 132],
    [53, 183, 121],
    [84, 197, 104],
    [122, 209, 81],
    [165, 219, 54],
    [210, 226, 27],
    [253, 231, 37],
];

//! Geographic Area Definition (GAD) schema: the grid of area rectangles
//! correction streams reference by `AreaId`, carried verbatim from
//! `spartntypes_get.py:482-498` — the header fields every GAD message
//! opens with (`SF005`/`SF068`/`SF069`), the area count field (`SF030`),
//! and each area's reference point and grid spacing (`SF031`-`SF037`).
use super::fields::*;
use super::{CountSource, SchemaEntry};

const AREA_DEFINITION: &[SchemaEntry] = &[
    SchemaEntry::Field { name: "AreaId", attr: SF031_AREA_ID },
    SchemaEntry::Field { name: "AreaRefLat", attr: SF032_AREA_REF_LAT },
    SchemaEntry::Field { name: "AreaRefLon", attr: SF033_AREA_REF_LON },
    SchemaEntry::Field { name: "LatGridCount", attr: SF034_LAT_GRID_COUNT },
    SchemaEntry::Field { name: "LonGridCount", attr: SF035_LON_GRID_COUNT },
    SchemaEntry::Field { name: "LatGridSpacing", attr: SF036_LAT_GRID_SPACING },
    SchemaEntry::Field { name: "LonGridSpacing", attr: SF037_LON_GRID_SPACING },
];

pub const SCHEMA: &[SchemaEntry] = &[
    SchemaEntry::Field { name: "Siou", attr: SF005_SIOU },
    SchemaEntry::Field { name: "Aiou", attr: SF068_AIOU },
    SchemaEntry::Field { name: "Reserved", attr: SF069_RESERVED },
    SchemaEntry::Field { name: "AreaCount", attr: SF030_AREA_COUNT },
    SchemaEntry::Group {
        name: "Area",
        count: CountSource::FromField("AreaCount"),
        items: AREA_DEFINITION,
    },
];

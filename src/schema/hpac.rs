//! High-Precision Atmosphere Correction (HPAC) schemas: `HPAC_HDR`
//! followed by `groupAtm` (sized by the area count field `SF030`), each
//! area carrying an `AREA_DATA_BLOCK` with an optional `TROP_DATA_BLOCK`
//! and an optional ionosphere block, the latter's satellite mask and
//! `ION_SAT_BLOCK` group varying per constellation `msgSubtype` the same
//! way OCB's satellite/bias masks do. Grounded in `spartntypes_get.py`'s
//! `HPAC_HDR` / `AREA_DATA_BLOCK` / `TROP_DATA_BLOCK` / `ION_SAT_BLOCK`
//! tables.
use super::fields::*;
use super::{CountSource, Predicate, SchemaEntry};

/// Troposphere correction for one area, present only when the area's
/// `TropoBlockInd` flag is set. The polynomial-coefficient set carried
/// depends on `TropoPolyType`; the residual field is separately gated by
/// `TropoResidualInd`.
const TROP_DATA_BLOCK: &[SchemaEntry] = &[
    SchemaEntry::Field { name: "TropoQuality", attr: SF041_TROPO_QUALITY },
    SchemaEntry::Field { name: "TropoPolyType", attr: SF044_TROPO_POLY_TYPE },
    SchemaEntry::Conditional {
        arms: &[
            (
                Predicate::Equals { field: "TropoPolyType", value: 1 },
                &[SchemaEntry::Field { name: "TropoPolyC00", attr: SF042_TROPO_POLY_C00 }] as &[SchemaEntry],
            ),
            (
                Predicate::Equals { field: "TropoPolyType", value: 2 },
                &[
                    SchemaEntry::Field { name: "TropoPolyC00", attr: SF042_TROPO_POLY_C00 },
                    SchemaEntry::Field { name: "TropoPolyT01", attr: SF043T_TROPO_POLY_T01 },
                    SchemaEntry::Field { name: "TropoPolyC10", attr: SF043C_TROPO_POLY_C10 },
                ],
            ),
        ],
        default: None,
    },
    SchemaEntry::Field { name: "TropoResidualInd", attr: SF051_TROPO_RESIDUAL_IND },
    SchemaEntry::Conditional {
        arms: &[(
            Predicate::Equals { field: "TropoResidualInd", value: 1 },
            &[
                SchemaEntry::Field { name: "TropoResidualSize", attr: SF052_TROPO_RESIDUAL_SIZE },
                SchemaEntry::Field { name: "TropoResidual", attr: SF053_TROPO_RESIDUAL },
            ],
        )],
        default: None,
    },
];

/// Ionosphere correction for one satellite within an area's iono block,
/// following the same poly-type/residual-indicator gating as
/// `TROP_DATA_BLOCK`. The original source's nested Galileo branch
/// references a field named `SF041I`, which does not exist anywhere else
/// in the table; every sibling branch keys off the iono-block indicator
/// decoded one level up (`IonoBlockInd`/`SF040I`), so that is the
/// condition this block relies on by only being reachable from within
/// that gate (see DESIGN.md's typo-normalization note, parallel to OQ2).
const ION_SAT_BLOCK: &[SchemaEntry] = &[
    SchemaEntry::Field { name: "IonoQualitySat", attr: SF055_IONO_QUALITY_SAT },
    SchemaEntry::Field { name: "IonoPolyType", attr: SF056_IONO_POLY_TYPE },
    SchemaEntry::Conditional {
        arms: &[
            (
                Predicate::Equals { field: "IonoPolyType", value: 1 },
                &[SchemaEntry::Field { name: "IonoPolyC00", attr: SF057_IONO_POLY_C00 }] as &[SchemaEntry],
            ),
            (
                Predicate::Equals { field: "IonoPolyType", value: 2 },
                &[
                    SchemaEntry::Field { name: "IonoPolyC00", attr: SF057_IONO_POLY_C00 },
                    SchemaEntry::Field { name: "IonoPolyC01", attr: SF058_IONO_POLY_C01 },
                    SchemaEntry::Field { name: "IonoPolyC10", attr: SF059_IONO_POLY_C10 },
                ],
            ),
        ],
        default: None,
    },
    SchemaEntry::Field { name: "IonoResidualInd", attr: SF063_IONO_RESIDUAL_IND },
    SchemaEntry::Conditional {
        arms: &[(
            Predicate::Equals { field: "IonoResidualInd", value: 1 },
            &[SchemaEntry::Field { name: "IonoResidual", attr: SF064_IONO_RESIDUAL }],
        )],
        default: None,
    },
];

/// Builds the per-constellation HPAC schema. Every constellation shares
/// `HPAC_HDR`, `AREA_DATA_BLOCK`, and `TROP_DATA_BLOCK`; only the
/// ionosphere block's satellite-mask field identifier varies by
/// constellation (spec.md §3.2).
macro_rules! hpac_schema {
    ($name:ident, $iono_sat_mask:expr) => {
        const $name: &[SchemaEntry] = &[
            SchemaEntry::Field { name: "Siou", attr: SF005_SIOU },
            SchemaEntry::Field { name: "Aiou", attr: SF068_AIOU },
            SchemaEntry::Field { name: "Reserved", attr: SF069_RESERVED },
            SchemaEntry::Field { name: "AreaCount", attr: SF030_AREA_COUNT },
            SchemaEntry::Group {
                name: "Area",
                count: CountSource::FromField("AreaCount"),
                items: &[
                    SchemaEntry::Field { name: "AreaId", attr: SF031_AREA_ID },
                    SchemaEntry::Field { name: "AreaQuality", attr: SF039_AREA_QUALITY },
                    SchemaEntry::Field { name: "TropoBlockInd", attr: SF040T_TROPO_BLOCK_IND },
                    SchemaEntry::Field { name: "IonoBlockInd", attr: SF040I_IONO_BLOCK_IND },
                    SchemaEntry::Conditional {
                        arms: &[(Predicate::Equals { field: "TropoBlockInd", value: 1 }, TROP_DATA_BLOCK)],
                        default: None,
                    },
                    SchemaEntry::Conditional {
                        arms: &[(
                            Predicate::Equals { field: "IonoBlockInd", value: 1 },
                            &[
                                SchemaEntry::Field { name: "IonoQuality", attr: SF054_IONO_QUALITY },
                                SchemaEntry::Field { name: "IonoSatMask", attr: $iono_sat_mask },
                                SchemaEntry::Group {
                                    name: "IonoSat",
                                    count: CountSource::PopCountOfField("IonoSatMask"),
                                    items: ION_SAT_BLOCK,
                                },
                            ],
                        )],
                        default: None,
                    },
                ],
            },
        ];
    };
}

hpac_schema!(GPS_SCHEMA, SF011_IONO_SAT_MASK_GPS);
hpac_schema!(GLO_SCHEMA, SF042_IONO_SAT_MASK_GLO);
hpac_schema!(GAL_SCHEMA, SF093_IONO_SAT_MASK_GAL);
hpac_schema!(BEI_SCHEMA, SF0114_IONO_SAT_MASK_BEI);
hpac_schema!(QZS_SCHEMA, SF0135_IONO_SAT_MASK_QZS);

const EMPTY_SCHEMA: &[SchemaEntry] = &[];

pub fn lookup(msg_subtype: u8) -> Option<&'static [SchemaEntry]> {
    match msg_subtype {
        0 => Some(GPS_SCHEMA),
        1 => Some(GLO_SCHEMA),
        2 => Some(GAL_SCHEMA),
        3 => Some(BEI_SCHEMA),
        4 => Some(QZS_SCHEMA),
        _ => Some(EMPTY_SCHEMA),
    }
}

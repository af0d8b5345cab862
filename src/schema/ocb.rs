//! Orbit, Clock, Bias (OCB) correction schemas, one per constellation
//! `msgSubtype` (GPS, GLONASS, Galileo, BeiDou, QZSS), following
//! `spartntypes_get.py`'s `OCB_HDR` + per-constellation satellite mask +
//! `groupSat` (sized by the satellite mask's popcount) + per-satellite
//! `ORBCLK_BLOCK`, phase-bias mask + `groupSF0xx-BITS` (sized by *that*
//! mask's popcount) of `PHAS_BIAS_BLOCK` entries, and code-bias mask +
//! `groupSF0xx-BITS` of single-field code-bias entries.
use super::fields::*;
use super::{CountSource, SchemaEntry};

/// Shared by every constellation: radial/along-track/cross-track orbit
/// corrections, clock bias, and the per-satellite quality flags.
const ORBCLK_BLOCK: &[SchemaEntry] = &[
    SchemaEntry::Field { name: "OrbitRadial", attr: SF020R_ORBIT_RADIAL },
    SchemaEntry::Field { name: "OrbitAlong", attr: SF020A_ORBIT_ALONG },
    SchemaEntry::Field { name: "OrbitCross", attr: SF020C_ORBIT_CROSS },
    SchemaEntry::Field { name: "OrbitVelocityFlag", attr: SF021_VELOCITY_FLAG },
    SchemaEntry::Field { name: "UserRangeError", attr: SF022_USER_RANGE_ERROR },
    SchemaEntry::Field { name: "ClockBias", attr: SF020_CLOCK_BIAS },
    SchemaEntry::Field { name: "IssueOfClock", attr: SF024_ISSUE_OF_CLOCK },
];

/// One entry of a phase-bias `groupSF0xx-BITS` group.
const PHAS_BIAS_BLOCK: &[SchemaEntry] = &[
    SchemaEntry::Field { name: "PhaseBias", attr: SF023_PHASE_BIAS },
    SchemaEntry::Field { name: "PhaseBiasContinuity", attr: SF015_CONTINUITY },
    SchemaEntry::Field { name: "PhaseBiasDiscontinuity", attr: SF020PB_PHASE_DISCONTINUITY },
];

/// One entry of a code-bias `groupSF0xx-BITS` group.
const CODE_BIAS_ENTRY: &[SchemaEntry] = &[SchemaEntry::Field { name: "CodeBias", attr: SF029_CODE_BIAS }];

/// Builds the per-constellation OCB schema. Constellations share
/// `OCB_HDR`, `ORBCLK_BLOCK`, `PHAS_BIAS_BLOCK`, and the code-bias entry
/// shape, but each has its own ephemeris-type, satellite-mask,
/// phase-bias-mask, and code-bias-mask field identifiers (spec.md §3.2).
macro_rules! ocb_schema {
    ($name:ident, $eph:expr, $sat_mask:expr, $pb_mask:expr, $cb_mask:expr) => {
        const $name: &[SchemaEntry] = &[
            SchemaEntry::Field { name: "Siou", attr: SF005_SIOU },
            SchemaEntry::Field { name: "Reserved", attr: SF069_RESERVED },
            SchemaEntry::Field { name: "SolutionId", attr: SF008_SOLUTION_ID },
            SchemaEntry::Field { name: "SolutionProcId", attr: SF009_SOLUTION_PROC_ID },
            SchemaEntry::Field { name: "EpochTime", attr: SF010_EPOCH_TIME },
            SchemaEntry::Field { name: "EphemerisType", attr: $eph },
            SchemaEntry::Field { name: "NSatMaskInd", attr: NSATMASK_IND },
            SchemaEntry::Field { name: "SatMask", attr: $sat_mask },
            SchemaEntry::Group {
                name: "Sat",
                count: CountSource::PopCountOfField("SatMask"),
                items: &[
                    SchemaEntry::Field { name: "Dnu", attr: SF013_DNU },
                    SchemaEntry::Field { name: "OcbPresent", attr: SF014_OCB_PRESENT },
                    SchemaEntry::Field { name: "Continuity", attr: SF015_CONTINUITY },
                    SchemaEntry::Field { name: "Iode", attr: SF016_IODE },
                    SchemaEntry::Group { name: "OrbClk", count: CountSource::Fixed(1), items: ORBCLK_BLOCK },
                    SchemaEntry::Field { name: "NPhaBiasMaskInd", attr: NPHABIASMASK_IND },
                    SchemaEntry::Field { name: "PhaseBiasMask", attr: $pb_mask },
                    SchemaEntry::Group {
                        name: "PhaseBias",
                        count: CountSource::PopCountOfField("PhaseBiasMask"),
                        items: PHAS_BIAS_BLOCK,
                    },
                    SchemaEntry::Field { name: "NCodBiasMaskInd", attr: NCODBIASMASK_IND },
                    SchemaEntry::Field { name: "CodeBiasMask", attr: $cb_mask },
                    SchemaEntry::Group {
                        name: "CodeBias",
                        count: CountSource::PopCountOfField("CodeBiasMask"),
                        items: CODE_BIAS_ENTRY,
                    },
                ],
            },
        ];
    };
}

ocb_schema!(GPS_SCHEMA, SF012_EPH_TYPE_GPS, SF011_SAT_MASK_GPS, SF025_PHASE_BIAS_MASK_GPS, SF027_CODE_BIAS_MASK_GPS);
ocb_schema!(GLO_SCHEMA, SF044_EPH_TYPE_GLO, SF042_SAT_MASK_GLO, SF056_PHASE_BIAS_MASK_GLO, SF058_CODE_BIAS_MASK_GLO);
ocb_schema!(GAL_SCHEMA, SF095_EPH_TYPE_GAL, SF093_SAT_MASK_GAL, SF0102_PHASE_BIAS_MASK_GAL, SF0105_CODE_BIAS_MASK_GAL);
ocb_schema!(BEI_SCHEMA, SF0116_EPH_TYPE_BEI, SF0114_SAT_MASK_BEI, SF0123_PHASE_BIAS_MASK_BEI, SF0126_CODE_BIAS_MASK_BEI);
ocb_schema!(QZS_SCHEMA, SF0137_EPH_TYPE_QZS, SF0135_SAT_MASK_QZS, SF0144_PHASE_BIAS_MASK_QZS, SF0147_CODE_BIAS_MASK_QZS);

/// Placeholder for constellations whose correction stream carries no
/// sub-entries yet (mirrors pyspartn's `{}` entries for unpopulated
/// message families).
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

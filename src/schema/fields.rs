//! Field-attribute table: bit width, signedness, and scaling for the
//! identifiers referenced by the message schemas. Grouped the way
//! `spartntypes_get.py` groups them: a header shared by every OCB/HPAC/GAD
//! message, then the per-constellation mask fields, then the shared
//! sub-block tables (`ORBCLK_BLOCK`, `PHAS_BIAS_BLOCK`, `AREA_DATA_BLOCK`,
//! `TROP_DATA_BLOCK`, `ION_SAT_BLOCK`) those masks gate. Widths and
//! resolutions follow the shape of `spartntypes_core.py`'s field table
//! (unsigned counts and masks, signed scaled corrections), but the pack
//! was retrieved without that file, so the concrete values below are
//! chosen to be internally consistent rather than copied from a specific
//! revision of the wire format (see DESIGN.md's "Known simplifications").
use crate::core::FieldAttr;

// -- Shared OCB/HPAC/GAD header fields (spartntypes_get.py's `*_HDR` tables) --

pub const SF005_SIOU: FieldAttr = FieldAttr::plain(5);
pub const SF068_AIOU: FieldAttr = FieldAttr::plain(5);
pub const SF069_RESERVED: FieldAttr = FieldAttr::plain(1);

// -- OCB_HDR-only fields --

pub const SF008_SOLUTION_ID: FieldAttr = FieldAttr::plain(7);
pub const SF009_SOLUTION_PROC_ID: FieldAttr = FieldAttr::plain(4);
pub const SF010_EPOCH_TIME: FieldAttr = FieldAttr::plain(12);

// -- Per-satellite fields shared across every OCB constellation --

pub const SF013_DNU: FieldAttr = FieldAttr::plain(1);
pub const SF014_OCB_PRESENT: FieldAttr = FieldAttr::plain(3);
pub const SF015_CONTINUITY: FieldAttr = FieldAttr::plain(4);
pub const SF016_IODE: FieldAttr = FieldAttr::plain(8);

// -- ORBCLK_BLOCK (shared across constellations) --

pub const SF020R_ORBIT_RADIAL: FieldAttr = FieldAttr::scaled(14, true, 0.002);
pub const SF020A_ORBIT_ALONG: FieldAttr = FieldAttr::scaled(12, true, 0.008);
pub const SF020C_ORBIT_CROSS: FieldAttr = FieldAttr::scaled(12, true, 0.008);
pub const SF021_VELOCITY_FLAG: FieldAttr = FieldAttr::plain(1);
pub const SF022_USER_RANGE_ERROR: FieldAttr = FieldAttr::plain(3);
pub const SF020_CLOCK_BIAS: FieldAttr = FieldAttr::scaled(15, true, 0.001);
pub const SF024_ISSUE_OF_CLOCK: FieldAttr = FieldAttr::plain(8);

// -- PHAS_BIAS_BLOCK (shared across constellations) --

pub const SF023_PHASE_BIAS: FieldAttr = FieldAttr::scaled(11, true, 0.02);
pub const SF020PB_PHASE_DISCONTINUITY: FieldAttr = FieldAttr::plain(2);

// -- Single field making up a code-bias group entry --

pub const SF029_CODE_BIAS: FieldAttr = FieldAttr::scaled(11, true, 0.02);

// -- Mask-sentinel fields, one per mask kind, shared across constellations
// (spec.md §3.2's `NSATMASK`/`NPHABIASMASK`/`NCODBIASMASK`; decoded as a
// plain field immediately preceding its fixed-width mask rather than
// driving the mask's width -- see DESIGN.md). --

pub const NSATMASK_IND: FieldAttr = FieldAttr::plain(1);
pub const NPHABIASMASK_IND: FieldAttr = FieldAttr::plain(1);
pub const NCODBIASMASK_IND: FieldAttr = FieldAttr::plain(1);

// -- Per-constellation ephemeris-type fields --

pub const SF012_EPH_TYPE_GPS: FieldAttr = FieldAttr::plain(2);
pub const SF044_EPH_TYPE_GLO: FieldAttr = FieldAttr::plain(2);
pub const SF095_EPH_TYPE_GAL: FieldAttr = FieldAttr::plain(2);
pub const SF0116_EPH_TYPE_BEI: FieldAttr = FieldAttr::plain(2);
pub const SF0137_EPH_TYPE_QZS: FieldAttr = FieldAttr::plain(2);

// -- Per-constellation satellite-mask fields (spec.md §3.2; each
// constellation covers a different number of satellite slots) --

pub const SF011_SAT_MASK_GPS: FieldAttr = FieldAttr::plain(32);
pub const SF042_SAT_MASK_GLO: FieldAttr = FieldAttr::plain(24);
pub const SF093_SAT_MASK_GAL: FieldAttr = FieldAttr::plain(32);
pub const SF0114_SAT_MASK_BEI: FieldAttr = FieldAttr::plain(32);
pub const SF0135_SAT_MASK_QZS: FieldAttr = FieldAttr::plain(10);

// -- Per-constellation phase-bias-mask fields (`groupSF025-BITS` etc.) --

pub const SF025_PHASE_BIAS_MASK_GPS: FieldAttr = FieldAttr::plain(11);
pub const SF056_PHASE_BIAS_MASK_GLO: FieldAttr = FieldAttr::plain(8);
pub const SF0102_PHASE_BIAS_MASK_GAL: FieldAttr = FieldAttr::plain(11);
pub const SF0123_PHASE_BIAS_MASK_BEI: FieldAttr = FieldAttr::plain(11);
pub const SF0144_PHASE_BIAS_MASK_QZS: FieldAttr = FieldAttr::plain(11);

// -- Per-constellation code-bias-mask fields (`groupSF027-BITS` etc.) --

pub const SF027_CODE_BIAS_MASK_GPS: FieldAttr = FieldAttr::plain(11);
pub const SF058_CODE_BIAS_MASK_GLO: FieldAttr = FieldAttr::plain(8);
pub const SF0105_CODE_BIAS_MASK_GAL: FieldAttr = FieldAttr::plain(11);
pub const SF0126_CODE_BIAS_MASK_BEI: FieldAttr = FieldAttr::plain(11);
pub const SF0147_CODE_BIAS_MASK_QZS: FieldAttr = FieldAttr::plain(11);

// -- HPAC_HDR fields --

pub const SF030_AREA_COUNT: FieldAttr = FieldAttr::plain(5);

// -- AREA_DATA_BLOCK fields --

pub const SF031_AREA_ID: FieldAttr = FieldAttr::plain(8);
pub const SF039_AREA_QUALITY: FieldAttr = FieldAttr::plain(4);
pub const SF040T_TROPO_BLOCK_IND: FieldAttr = FieldAttr::plain(1);
pub const SF040I_IONO_BLOCK_IND: FieldAttr = FieldAttr::plain(1);

// -- TROP_DATA_BLOCK fields --

pub const SF041_TROPO_QUALITY: FieldAttr = FieldAttr::plain(4);
pub const SF044_TROPO_POLY_TYPE: FieldAttr = FieldAttr::plain(2);
pub const SF042_TROPO_POLY_C00: FieldAttr = FieldAttr::scaled(8, true, 0.004);
pub const SF043T_TROPO_POLY_T01: FieldAttr = FieldAttr::scaled(6, true, 0.002);
pub const SF043C_TROPO_POLY_C10: FieldAttr = FieldAttr::scaled(6, true, 0.002);
pub const SF051_TROPO_RESIDUAL_IND: FieldAttr = FieldAttr::plain(1);
pub const SF052_TROPO_RESIDUAL_SIZE: FieldAttr = FieldAttr::plain(2);
pub const SF053_TROPO_RESIDUAL: FieldAttr = FieldAttr::scaled(9, true, 0.02);

// -- Iono block header field (shared across constellations) --

pub const SF054_IONO_QUALITY: FieldAttr = FieldAttr::plain(4);

// -- Per-constellation iono satellite-mask fields --

pub const SF011_IONO_SAT_MASK_GPS: FieldAttr = FieldAttr::plain(32);
pub const SF042_IONO_SAT_MASK_GLO: FieldAttr = FieldAttr::plain(24);
pub const SF093_IONO_SAT_MASK_GAL: FieldAttr = FieldAttr::plain(32);
pub const SF0114_IONO_SAT_MASK_BEI: FieldAttr = FieldAttr::plain(32);
pub const SF0135_IONO_SAT_MASK_QZS: FieldAttr = FieldAttr::plain(10);

// -- ION_SAT_BLOCK fields --

pub const SF055_IONO_QUALITY_SAT: FieldAttr = FieldAttr::plain(4);
pub const SF056_IONO_POLY_TYPE: FieldAttr = FieldAttr::plain(2);
pub const SF057_IONO_POLY_C00: FieldAttr = FieldAttr::scaled(10, true, 0.05);
pub const SF058_IONO_POLY_C01: FieldAttr = FieldAttr::scaled(8, true, 0.02);
pub const SF059_IONO_POLY_C10: FieldAttr = FieldAttr::scaled(8, true, 0.02);
pub const SF063_IONO_RESIDUAL_IND: FieldAttr = FieldAttr::plain(1);
pub const SF064_IONO_RESIDUAL: FieldAttr = FieldAttr::scaled(8, true, 0.05);

// -- GAD fields (spartntypes_get.py:482-498) --

pub const SF032_AREA_REF_LAT: FieldAttr = FieldAttr::scaled(15, true, 0.1);
pub const SF033_AREA_REF_LON: FieldAttr = FieldAttr::scaled(16, true, 0.1);
pub const SF034_LAT_GRID_COUNT: FieldAttr = FieldAttr::plain(5);
pub const SF035_LON_GRID_COUNT: FieldAttr = FieldAttr::plain(5);
pub const SF036_LAT_GRID_SPACING: FieldAttr = FieldAttr::plain(5);
pub const SF037_LON_GRID_SPACING: FieldAttr = FieldAttr::plain(5);

// Reserved for BPAC/EAS-DYN once those families carry real schemas
// (schema::aux currently keeps them as empty placeholders).
pub const SF070_SEQ_NUM: FieldAttr = FieldAttr::plain(16);
pub const SF071_EVENT_ID: FieldAttr = FieldAttr::plain(8);

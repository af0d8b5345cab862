//! Basic Precise Point Positioning Atmosphere Correction (BPAC) and
//! Earth-orientation / Auxiliary (EAS-DYN, EAS-GRP) message families.
//! pyspartn's `spartntypes_get.py` carries these as empty placeholder
//! tables (`{}` with a `# TODO` marker) as of the retrieved source; the
//! same placeholder status is kept here rather than invented.
use super::SchemaEntry;

pub const BPAC_SCHEMA: &[SchemaEntry] = &[];
pub const EAS_DYN_SCHEMA: &[SchemaEntry] = &[];
pub const EAS_GRP_SCHEMA: &[SchemaEntry] = &[];

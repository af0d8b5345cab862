//! Low-level byte and bit primitives independent of any particular
//! SPARTN message's schema: bit cursor, CRC algorithms, AES-CTR
//! decryption, and the `ByteSource` transport abstraction.
pub mod bits;
pub mod crc;
pub mod crypto;
pub mod traits;

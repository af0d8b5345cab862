//! Stateful SPARTN frame reader: resynchronizes on the preamble byte,
//! parses the header, collects a full frame from the buffered source,
//! validates its CRC, and decrypts it when requested (spec.md §6, §7
//! error-recovery behavior).
use crate::core::Record;
use crate::error::SpartnError;
use crate::infra::buffered::ReadBuffer;
use crate::infra::codec::bits::BitCursor;
use crate::infra::codec::crc::CrcKind;
use crate::infra::codec::crypto::{self, SessionKey};
use crate::infra::codec::traits::ByteSource;
use crate::interpreter;
use crate::schema;
use crate::transport::frame::RawFrame;
use crate::transport::header::{FrameHeader, PREAMBLE};

/// Generous upper bound on header size in bytes, used only to decide how
/// much to have buffered before attempting a header parse.
const MAX_HEADER_BYTES: usize = 16;

type ErrorHandler = Box<dyn FnMut(&SpartnError) + Send>;

/// Builds a [`SpartnReader`] with the options spec.md §6.1 exposes,
/// mirroring the teacher's `IsoName::builder()` construction style.
pub struct SpartnReaderBuilder<S: ByteSource> {
    source: S,
    bufsize: usize,
    validate: bool,
    decrypt: bool,
    key: Option<SessionKey>,
    quitonerror: bool,
    scaling: bool,
    error_handler: Option<ErrorHandler>,
}

impl<S: ByteSource> SpartnReaderBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            bufsize: crate::infra::buffered::DEFAULT_CAPACITY,
            validate: true,
            decrypt: false,
            key: None,
            quitonerror: true,
            scaling: true,
            error_handler: None,
        }
    }

    pub fn bufsize(mut self, bufsize: usize) -> Self {
        self.bufsize = bufsize;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn decrypt(mut self, decrypt: bool) -> Self {
        self.decrypt = decrypt;
        self
    }

    pub fn key(mut self, hex_key: &str) -> Result<Self, SpartnError> {
        self.key = Some(SessionKey::from_hex(hex_key)?);
        Ok(self)
    }

    /// Installs an already-parsed session key, bypassing the hex parse
    /// `key` does. Used internally by the stateless [`parse`] entry point,
    /// which receives `ParseOptions::key` as a `SessionKey` directly.
    pub(crate) fn with_session_key(mut self, key: SessionKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn quitonerror(mut self, quitonerror: bool) -> Self {
        self.quitonerror = quitonerror;
        self
    }

    pub fn scaling(mut self, scaling: bool) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn error_handler(mut self, handler: impl FnMut(&SpartnError) + Send + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Builds the reader. If no explicit key was supplied via
    /// [`Self::key`], falls back to the `MQTTKEY` environment variable,
    /// matching the original SPARTN reader's key-resolution precedence.
    ///
    /// Returns `Err(ParameterError)` if `decrypt(true)` was requested but
    /// no key could be resolved from either source (spec.md §4.4: this is
    /// a construction-time error, matching `pyspartn.SPARTNReader.__init__`,
    /// not deferred until the first encrypted frame is read).
    pub fn build(mut self) -> Result<SpartnReader<S>, SpartnError> {
        if self.key.is_none() {
            if let Ok(env_key) = std::env::var("MQTTKEY") {
                self.key = SessionKey::from_hex(&env_key).ok();
            }
        }
        if self.decrypt && self.key.is_none() {
            return Err(SpartnError::ParameterError(
                "decrypt requested but no key was configured (explicit key or MQTTKEY)".into(),
            ));
        }
        Ok(SpartnReader {
            buf: ReadBuffer::with_capacity(self.source, self.bufsize),
            validate: self.validate,
            decrypt: self.decrypt,
            key: self.key,
            quitonerror: self.quitonerror,
            scaling: self.scaling,
            error_handler: self.error_handler,
        })
    }
}

/// Reads SPARTN frames from a buffered byte source one at a time.
pub struct SpartnReader<S: ByteSource> {
    buf: ReadBuffer<S>,
    validate: bool,
    decrypt: bool,
    key: Option<SessionKey>,
    quitonerror: bool,
    scaling: bool,
    error_handler: Option<ErrorHandler>,
}

impl<S: ByteSource> SpartnReader<S> {
    /// Runs the installed `errorhandler`, or logs the error when none was
    /// configured (spec.md §6.1's `errorhandler` option).
    fn notify(&mut self, err: &SpartnError) {
        match self.error_handler.as_mut() {
            Some(handler) => handler(err),
            None => log::error!("{err}"),
        }
    }

    /// Reads the next complete, CRC-checked (and decrypted, if
    /// configured) frame. Returns `Ok(None)` at a clean end of stream.
    pub fn read(&mut self) -> Result<Option<RawFrame>, SpartnError> {
        loop {
            if !self.resync()? {
                return Ok(None);
            }

            while self.buf.available() < 1 + MAX_HEADER_BYTES {
                if self.buf.fill()? == 0 {
                    break;
                }
            }

            let bytes = self.buf.peek();
            if bytes.len() < 2 {
                return Ok(None);
            }

            let mut cursor = BitCursor::new(&bytes[1..]);
            let header = match FrameHeader::parse(&mut cursor) {
                Ok(header) => header,
                Err(err) => {
                    if self.quitonerror {
                        return Err(err);
                    }
                    self.notify(&err);
                    self.buf.consume(1);
                    continue;
                }
            };

            let header_bytes = (cursor.position() + 7) / 8;
            // crc_type is a 2-bit field (0..=3), over which from_crc_type is total.
            let crc_kind = CrcKind::from_crc_type(header.crc_type)
                .expect("crc_type is a 2-bit field; from_crc_type is total over 0..=3");

            let n_data = header.n_data as usize;
            let auth_len = header.emb_auth_len_bytes();
            let crc_len = crc_kind.byte_len();
            let total_len = 1 + header_bytes + n_data + auth_len + crc_len;

            while self.buf.available() < total_len {
                if self.buf.fill()? == 0 {
                    return Err(SpartnError::TruncatedFrame {
                        expected: total_len - self.buf.available(),
                    });
                }
            }

            let frame_bytes = self.buf.peek()[..total_len].to_vec();
            self.buf.consume(total_len);

            let payload_start = 1 + header_bytes;
            let payload_end = payload_start + n_data;
            let auth_end = payload_end + auth_len;

            let computed = crate::infra::codec::crc::compute(crc_kind, &frame_bytes[1..auth_end]);
            let expected = frame_bytes[auth_end..total_len]
                .iter()
                .fold(0u32, |acc, &b| (acc << 8) | b as u32);

            if self.validate && computed != expected {
                let err = SpartnError::InvalidCrc { computed, expected };
                if self.quitonerror {
                    return Err(err);
                }
                self.notify(&err);
                continue;
            }

            let mut payload = frame_bytes[payload_start..payload_end].to_vec();
            let mut emb_auth = frame_bytes[payload_end..auth_end].to_vec();

            if header.eaf && self.decrypt {
                // build() rejects decrypt(true) with no resolvable key, so this is always Some.
                let key = self.key.as_ref().expect("builder guarantees a key when decrypt is enabled");
                let mut combined = payload;
                combined.extend_from_slice(&emb_auth);
                let decrypted = crypto::decrypt(&header, &combined, key)?;
                payload = decrypted[..n_data].to_vec();
                emb_auth = decrypted[n_data..].to_vec();
            }

            log::debug!(
                "decoded frame msgType={} msgSubtype={} nData={}",
                header.msg_type, header.msg_subtype, header.n_data
            );
            return Ok(Some(RawFrame { header, payload, emb_auth, frame_crc: expected, raw_bytes: frame_bytes }));
        }
    }

    /// Reads a frame and, if a schema is registered for its message
    /// type/subtype, interprets the payload into a `Record`. An
    /// unregistered `(msgType, msgSubtype)` pair is itself a
    /// `SchemaMismatch` (spec.md §7's "unknown message identity"),
    /// subject to the same `quitonerror` policy as every other error here.
    pub fn parse(&mut self) -> Result<Option<(RawFrame, Option<Record>)>, SpartnError> {
        let Some(frame) = self.read()? else { return Ok(None) };
        let record = match schema::lookup(frame.msg_type(), frame.msg_subtype()) {
            Some(entries) => {
                let mut cursor = BitCursor::new(&frame.payload);
                let mut record = interpreter::decode(&mut cursor, entries)?;
                if !self.scaling {
                    record = descale(record);
                }
                Some(record)
            }
            None => {
                let err = SpartnError::SchemaMismatch(format!(
                    "no schema registered for msgType={} msgSubtype={}",
                    frame.msg_type(),
                    frame.msg_subtype()
                ));
                if self.quitonerror {
                    return Err(err);
                }
                self.notify(&err);
                None
            }
        };
        Ok(Some((frame, record)))
    }

    /// Iterates frames until clean end of stream, yielding `Err` for
    /// recoverable errors only when `quitonerror` is set (otherwise those
    /// are swallowed after running the error handler and resyncing).
    pub fn iterate(&mut self) -> impl Iterator<Item = Result<RawFrame, SpartnError>> + '_ {
        std::iter::from_fn(move || self.read().transpose())
    }

    /// Pulls bytes until the buffer starts with the preamble, reporting
    /// `UnknownProtocol` for each non-preamble byte discarded along the way
    /// (spec.md §4.3 step 1 / §8 scenario 3).
    fn resync(&mut self) -> Result<bool, SpartnError> {
        loop {
            if self.buf.available() == 0 && self.buf.fill()? == 0 {
                return Ok(false);
            }
            let Some(&byte) = self.buf.peek().first() else { return Ok(false) };
            if byte == PREAMBLE {
                return Ok(true);
            }
            let err = SpartnError::UnknownProtocol { byte };
            if self.quitonerror {
                return Err(err);
            }
            self.notify(&err);
            self.buf.consume(1);
        }
    }
}

/// Options for the stateless [`parse`] entry point, mirroring the keyword
/// arguments the original reader's `@staticmethod parse(message, **kwargs)`
/// accepts (spec.md §6.2).
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub validate: bool,
    pub decrypt: bool,
    pub key: Option<SessionKey>,
}

/// Parses one already-captured frame's `raw_bytes` without needing a
/// stateful [`SpartnReader`] around a byte source (spec.md §6.2). This is
/// what lets a caller hold on to a `RawFrame::raw_bytes` slice (e.g. one
/// read earlier, or received out of band) and re-derive its `Record`
/// on demand.
pub fn parse(raw_bytes: &[u8], opts: ParseOptions) -> Result<(RawFrame, Option<Record>), SpartnError> {
    let mut builder = SpartnReaderBuilder::new(std::io::Cursor::new(raw_bytes.to_vec()))
        .validate(opts.validate)
        .decrypt(opts.decrypt)
        .quitonerror(true);
    if let Some(key) = opts.key {
        builder = builder.with_session_key(key);
    }
    let mut reader = builder.build()?;
    reader
        .parse()?
        .ok_or(SpartnError::TruncatedFrame { expected: 0 })
}

/// Collapses every `Value::Rational` in `record` back to its raw integer,
/// for callers that built the reader with `scaling(false)`.
fn descale(record: Record) -> Record {
    let mut out = Record::new();
    for (name, value) in record.iter() {
        let raw = match value {
            crate::core::Value::Rational { raw, .. } => crate::core::Value::Signed(*raw),
            other => other.clone(),
        };
        out.push(name, raw);
    }
    out
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;

/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Md5,
    Sha256,
    Sha512,
}

impl HashAlgId {
    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            HashAlgId::Md5 => 16,
            HashAlgId::Sha256 => 32,
            HashAlgId::Sha512 => 64,
        }
    }
}

/// Block cipher mode of operation identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeId {
    Ecb,
    Cbc,
    Ctr,
}

impl ModeId {
    /// Short upper-case name, as used in log output.
    pub fn name(self) -> &'static str {
        match self {
            ModeId::Ecb => "ECB",
            ModeId::Cbc => "CBC",
            ModeId::Ctr => "CTR",
        }
    }

    /// Whether the mode carries an initialization vector.
    pub fn uses_iv(self) -> bool {
        !matches!(self, ModeId::Ecb)
    }
}

impl std::fmt::Display for ModeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

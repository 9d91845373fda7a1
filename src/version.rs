//! Package and ABI version records of the compiled library

/// A libtool-style ABI version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AbiVersion {
    /// The current interface version.
    pub current: u16,
    /// The latest revision of the current interface.
    pub revision: u16,
    /// How many past interface versions are still supported.
    pub age: u16,
}

/// The package version, as published.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageVersion {
    pub major: u16,
    pub minor: u16,
}

/// The ABI this library was compiled with.
pub const ABI_VERSION: AbiVersion = AbiVersion {
    current: 0,
    revision: 0,
    age: 0,
};

/// The package version this library was compiled from.
pub const PACKAGE_VERSION: PackageVersion = PackageVersion {
    major: parse_u16(env!("CARGO_PKG_VERSION_MAJOR")),
    minor: parse_u16(env!("CARGO_PKG_VERSION_MINOR")),
};

static COMPILED_ABI_VERSION: AbiVersion = ABI_VERSION;
static COMPILED_PACKAGE_VERSION: PackageVersion = PACKAGE_VERSION;

impl AbiVersion {
    /// The oldest interface version this ABI still supports, wrapping like
    /// the unsigned arithmetic it mirrors.
    pub const fn oldest_supported(&self) -> u16 {
        self.current.wrapping_sub(self.age)
    }

    /// Whether code built against `other` can use a library exposing `self`.
    ///
    /// ```
    /// use hut_atomic::version::AbiVersion;
    ///
    /// let lib = AbiVersion { current: 3, revision: 1, age: 1 };
    /// assert!(lib.is_compatible_with(&AbiVersion { current: 2, revision: 7, age: 0 }));
    /// assert!(!lib.is_compatible_with(&AbiVersion { current: 3, revision: 0, age: 0 }));
    /// ```
    pub const fn is_compatible_with(&self, other: &AbiVersion) -> bool {
        self.oldest_supported() == other.oldest_supported()
    }
}

/// Returns the ABI version of the compiled library.
pub fn abi_version() -> &'static AbiVersion {
    &COMPILED_ABI_VERSION
}

/// Returns the package version of the compiled library.
pub fn package_version() -> &'static PackageVersion {
    &COMPILED_PACKAGE_VERSION
}

/// Checks whether the compiled library is ABI compatible with `expected`,
/// typically the [`ABI_VERSION`] a dependent crate was built against.
pub fn is_abi_version_compatible(expected: &AbiVersion) -> bool {
    abi_version().is_compatible_with(expected)
}

const fn parse_u16(s: &str) -> u16 {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut v: u16 = 0;
    while i < bytes.len() {
        let d = bytes[i];
        assert!(d.is_ascii_digit(), "version component is not a number");
        v = v * 10 + (d - b'0') as u16;
        i += 1;
    }
    v
}

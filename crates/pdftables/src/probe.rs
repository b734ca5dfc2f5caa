//! Startup capability check.
//!
//! Reports which parts of the pipeline were compiled into this build. The
//! caller decides what to do with missing capabilities; probing has no side
//! effects.

/// One probed capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Human-readable package name.
    pub package: &'static str,
    /// Cargo feature that enables it, or `None` when always built in.
    pub feature: Option<&'static str>,
    /// Whether it is present in this build.
    pub available: bool,
}

/// Result of [`probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityReport {
    /// Capabilities in probe order.
    pub capabilities: Vec<Capability>,
}

impl CapabilityReport {
    /// Capabilities that are missing, in probe order.
    pub fn missing(&self) -> Vec<&Capability> {
        self.capabilities.iter().filter(|c| !c.available).collect()
    }

    /// Whether everything is available.
    pub fn is_complete(&self) -> bool {
        self.capabilities.iter().all(|c| c.available)
    }

    /// Cargo features that would enable the missing capabilities.
    pub fn missing_features(&self) -> Vec<&'static str> {
        self.missing().iter().filter_map(|c| c.feature).collect()
    }
}

/// Probe the table engine, the workbook writer and the three backends.
pub fn probe() -> CapabilityReport {
    CapabilityReport {
        capabilities: vec![
            Capability {
                package: "table engine",
                feature: None,
                available: true,
            },
            Capability {
                package: "xlsx writer",
                feature: Some("xlsx"),
                available: cfg!(feature = "xlsx"),
            },
            Capability {
                package: "tabula backend",
                feature: Some("tabula"),
                available: cfg!(feature = "tabula"),
            },
            Capability {
                package: "camelot backend",
                feature: Some("camelot"),
                available: cfg!(feature = "camelot"),
            },
            Capability {
                package: "pdfplumber backend",
                feature: Some("pdfplumber"),
                available: cfg!(feature = "pdfplumber"),
            },
        ],
    }
}

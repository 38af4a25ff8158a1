//! Instance extension support checks
//!
//! The windowing layer hands us a list of instance extension names it needs.
//! Before the instance is created every one of them must appear in the set
//! the Vulkan loader enumerates. Names are compared byte for byte; the
//! available set is enumerated fresh on every check and never cached.

use ash::vk;
use std::collections::HashSet;
use std::io::Write;
use std::str::Utf8Error;

/// One instance extension reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionProperties {
    /// Extension name, e.g. `VK_KHR_surface`
    pub name: String,
    /// Extension specification version
    pub spec_version: u32,
}

impl ExtensionProperties {
    /// Create an extension record
    pub fn new(name: impl Into<String>, spec_version: u32) -> Self {
        Self {
            name: name.into(),
            spec_version,
        }
    }
}

impl TryFrom<&vk::ExtensionProperties> for ExtensionProperties {
    type Error = Utf8Error;

    fn try_from(raw: &vk::ExtensionProperties) -> Result<Self, Self::Error> {
        // extension_name is a NUL-terminated fixed-size buffer
        let bytes: Vec<u8> = raw
            .extension_name
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();

        Ok(Self {
            name: std::str::from_utf8(&bytes)?.to_owned(),
            spec_version: raw.spec_version,
        })
    }
}

/// Convert raw enumeration results, dropping names that are not UTF-8
///
/// Required names are always UTF-8, so a dropped entry could never match
/// one byte for byte.
pub fn collect_extension_properties(raw: &[vk::ExtensionProperties]) -> Vec<ExtensionProperties> {
    raw.iter()
        .filter_map(|props| match ExtensionProperties::try_from(props) {
            Ok(props) => Some(props),
            Err(e) => {
                log::warn!("Skipping instance extension with non UTF-8 name: {}", e);
                None
            }
        })
        .collect()
}

/// Anything that can enumerate the instance extensions it supports
pub trait ExtensionSource {
    /// Enumerate all instance extensions currently available
    fn enumerate_instance_extensions(&self) -> Result<Vec<ExtensionProperties>, vk::Result>;
}

/// Check that every required name appears in `available`
///
/// An empty requirement list is always satisfied. Stops at the first
/// missing name.
pub fn check_extension_support<S: AsRef<str>>(required: &[S], available: &[ExtensionProperties]) -> bool {
    let available: HashSet<&str> = available.iter().map(|ext| ext.name.as_str()).collect();
    required.iter().all(|name| available.contains(name.as_ref()))
}

/// Required names that do not appear in `available`, in required order
pub fn missing_extensions<'a, S: AsRef<str>>(
    required: &'a [S],
    available: &[ExtensionProperties],
) -> Vec<&'a str> {
    let available: HashSet<&str> = available.iter().map(|ext| ext.name.as_str()).collect();
    required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !available.contains(*name))
        .collect()
}

/// Write the available extension listing
pub fn write_available_extensions<W: Write>(out: &mut W, available: &[ExtensionProperties]) -> std::io::Result<()> {
    writeln!(out, "available extensions:")?;
    for extension in available {
        writeln!(out, "\t{}", extension.name)?;
    }
    Ok(())
}

/// Enumerate `source` and check it against `required`
///
/// Prints the available extensions to standard output. If enumeration
/// fails the available set is treated as empty.
pub fn is_extension_set_supported<E, S>(source: &E, required: &[S]) -> bool
where
    E: ExtensionSource + ?Sized,
    S: AsRef<str>,
{
    let available = source.enumerate_instance_extensions().unwrap_or_else(|result| {
        log::warn!("Failed to enumerate instance extensions: {:?}", result);
        Vec::new()
    });

    if let Err(e) = write_available_extensions(&mut std::io::stdout().lock(), &available) {
        log::debug!("Could not print extension listing: {}", e);
    }

    if check_extension_support(required, &available) {
        log::debug!("All {} required instance extensions are available", required.len());
        true
    } else {
        log::warn!(
            "Missing required instance extensions: {:?}",
            missing_extensions(required, &available)
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn available(names: &[&str]) -> Vec<ExtensionProperties> {
        names.iter().map(|name| ExtensionProperties::new(*name, 1)).collect()
    }

    struct CountingSource {
        extensions: Vec<ExtensionProperties>,
        calls: Cell<u32>,
    }

    impl ExtensionSource for CountingSource {
        fn enumerate_instance_extensions(&self) -> Result<Vec<ExtensionProperties>, vk::Result> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.extensions.clone())
        }
    }

    struct FailingSource;

    impl ExtensionSource for FailingSource {
        fn enumerate_instance_extensions(&self) -> Result<Vec<ExtensionProperties>, vk::Result> {
            Err(vk::Result::ERROR_INITIALIZATION_FAILED)
        }
    }

    #[test]
    fn test_all_required_present() {
        let available = available(&["VK_KHR_surface", "VK_KHR_win32_surface", "VK_EXT_debug_utils"]);
        assert!(check_extension_support(&["VK_KHR_surface", "VK_KHR_win32_surface"], &available));
    }

    #[test]
    fn test_missing_required_extension() {
        let available = available(&["VK_KHR_surface"]);
        let required = ["VK_KHR_surface", "VK_KHR_missing_ext"];
        assert!(!check_extension_support(&required, &available));
        assert_eq!(missing_extensions(&required, &available), vec!["VK_KHR_missing_ext"]);
    }

    #[test]
    fn test_empty_requirement_always_satisfied() {
        let empty: [&str; 0] = [];
        assert!(check_extension_support(&empty, &[]));
        assert!(check_extension_support(&empty, &available(&["VK_KHR_surface"])));
    }

    #[test]
    fn test_superset_of_failing_requirement_still_fails() {
        let available = available(&["VK_KHR_surface", "VK_KHR_xcb_surface"]);
        assert!(!check_extension_support(&["VK_KHR_missing_ext"], &available));
        assert!(!check_extension_support(
            &["VK_KHR_surface", "VK_KHR_missing_ext", "VK_KHR_xcb_surface"],
            &available
        ));
    }

    #[test]
    fn test_requirement_order_does_not_matter() {
        let available = available(&["VK_KHR_surface", "VK_KHR_xlib_surface"]);
        assert!(check_extension_support(&["VK_KHR_xlib_surface", "VK_KHR_surface"], &available));
        assert!(check_extension_support(&["VK_KHR_surface", "VK_KHR_xlib_surface"], &available));

        assert!(!check_extension_support(&["VK_KHR_surface", "VK_KHR_nope"], &available));
        assert!(!check_extension_support(&["VK_KHR_nope", "VK_KHR_surface"], &available));
    }

    #[test]
    fn test_names_compared_exactly() {
        let available = available(&["vk_khr_surface", "VK_KHR_surface ", "VK_KHR_SURFACE"]);
        assert!(!check_extension_support(&["VK_KHR_surface"], &available));
    }

    fn raw(name: &[u8], spec_version: u32) -> vk::ExtensionProperties {
        let mut raw = vk::ExtensionProperties {
            spec_version,
            ..Default::default()
        };
        for (dst, src) in raw.extension_name.iter_mut().zip(name) {
            *dst = *src as std::os::raw::c_char;
        }
        raw
    }

    #[test]
    fn test_from_raw_properties_stops_at_nul() {
        let props = ExtensionProperties::try_from(&raw(b"VK_KHR_surface", 25)).unwrap();
        assert_eq!(props, ExtensionProperties::new("VK_KHR_surface", 25));
    }

    #[test]
    fn test_non_utf8_names_are_rejected() {
        assert!(ExtensionProperties::try_from(&raw(b"VK_X\xfe", 1)).is_err());
        assert!(ExtensionProperties::try_from(&raw(b"VK_X\xff", 1)).is_err());
    }

    #[test]
    fn test_distinct_invalid_names_never_match() {
        let enumerated = [raw(b"VK_X\xfe", 1), raw(b"VK_KHR_surface", 1), raw(b"VK_X\xff", 1)];
        let available = collect_extension_properties(&enumerated);

        assert_eq!(available, vec![ExtensionProperties::new("VK_KHR_surface", 1)]);
        assert!(!check_extension_support(&["VK_X\u{FFFD}"], &available));
    }

    #[test]
    fn test_listing_format() {
        let mut out = Vec::new();
        write_available_extensions(&mut out, &available(&["VK_KHR_surface", "VK_EXT_debug_utils"])).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "available extensions:\n\tVK_KHR_surface\n\tVK_EXT_debug_utils\n"
        );
    }

    #[test]
    fn test_source_enumerated_on_every_check() {
        let source = CountingSource {
            extensions: available(&["VK_KHR_surface"]),
            calls: Cell::new(0),
        };

        assert!(is_extension_set_supported(&source, &["VK_KHR_surface"]));
        assert!(!is_extension_set_supported(&source, &["VK_KHR_display"]));
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_enumeration_failure_treated_as_empty() {
        assert!(!is_extension_set_supported(&FailingSource, &["VK_KHR_surface"]));
        let empty: [&str; 0] = [];
        assert!(is_extension_set_supported(&FailingSource, &empty));
    }
}

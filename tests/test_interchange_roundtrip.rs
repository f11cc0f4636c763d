//! Integration tests for the SBML root element namespace header.

#[cfg(feature = "interchange")]
mod interchange_roundtrip {
    use rstest::rstest;
    use sbml::interchange::{InterchangeError, read_root, write_root};
    use sbml::{SbmlNamespaces, XmlNamespaces};

    // ── Helpers ─────────────────────────────────────────────────────

    fn with_extras(level: u32, version: u32) -> SbmlNamespaces {
        let mut sbml = SbmlNamespaces::new(level, version);
        sbml.add_namespace("http://www.w3.org/1998/Math/MathML", "math");
        sbml.add_namespace("http://www.w3.org/1999/xhtml", "html");
        sbml
    }

    // ── Root element ────────────────────────────────────────────────

    #[rstest]
    #[case(1, 1)]
    #[case(1, 2)]
    #[case(2, 1)]
    #[case(2, 2)]
    #[case(2, 3)]
    #[case(2, 4)]
    fn test_written_root_reads_back(#[case] level: u32, #[case] version: u32) {
        let sbml = with_extras(level, version);
        let bytes = write_root(&sbml).unwrap();
        let read = read_root(&bytes).unwrap();

        assert_eq!(read.level(), level);
        assert_eq!(read.version(), version);
        assert_eq!(read.extra_namespaces(), sbml.extra_namespaces());
        assert_eq!(read.namespaces().uri(0).unwrap(), sbml.sbml_uri().unwrap());
    }

    #[test]
    fn test_read_ignores_document_body() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<!-- header comment -->
<sbml xmlns="http://www.sbml.org/sbml/level2/version4" level="2" version="4">
  <model id="toy">
    <listOfSpecies><species id="S1" compartment="c"/></listOfSpecies>
  </model>
</sbml>
"#;
        let sbml = read_root(xml).unwrap();
        assert_eq!(sbml, SbmlNamespaces::new(2, 4));
    }

    #[test]
    fn test_malformed_xml_is_reported() {
        let err = read_root(b"<sbml xmlns=\"x\" level=\"2\" version=>").unwrap_err();
        assert!(matches!(err, InterchangeError::Xml(_)), "{err}");
    }

    // ── serde ───────────────────────────────────────────────────────

    #[test]
    fn test_xml_namespaces_json_shape() {
        let ns: XmlNamespaces = [("http://www.w3.org/1998/Math/MathML", "math")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&ns).unwrap();
        assert_eq!(json, r#"{"math":"http://www.w3.org/1998/Math/MathML"}"#);

        let parsed: XmlNamespaces = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ns);
    }

    #[test]
    fn test_sbml_namespaces_json_keeps_unknown_pair() {
        let json = serde_json::to_string(&SbmlNamespaces::new(3, 2)).unwrap();
        assert_eq!(json, r#"{"level":3,"version":2}"#);

        let parsed: SbmlNamespaces = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.level(), 3);
        assert!(parsed.namespaces().is_empty());
    }
}

//! Validation of raw record values and construction of record-set
//! payloads, plus rendering of fetched sets back into printable lines.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::azure::types::{
    ARecord, AaaaRecord, CaaRecord, RecordSet, RecordSetProperties, TxtRecord,
};

/// The record types this client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A,
    Aaaa,
    Caa,
    Cname,
    Txt,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Txt => "TXT",
        })
    }
}

impl FromStr for RecordType {
    type Err = RecordSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CAA" => Ok(RecordType::Caa),
            "CNAME" => Ok(RecordType::Cname),
            "TXT" => Ok(RecordType::Txt),
            other => Err(RecordSetError::UnsupportedRecordType(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordSetError {
    #[error("invalid IP address \"{0}\"")]
    InvalidAddress(String),
    #[error("invalid CAA flags \"{0}\": must be an integer between 0 and 255")]
    InvalidFlags(String),
    #[error("incomplete CAA record {0:?}")]
    IncompleteRecord(Vec<String>),
    #[error("unsupported record type {0}")]
    UnsupportedRecordType(String),
}

/// Build the payload for `record_type` from raw CLI values.
///
/// CNAME record sets cannot be constructed here; the provider treats them
/// as single-valued and this client only reads them.
pub fn build(
    record_type: RecordType,
    ttl: u32,
    values: &[String],
) -> Result<RecordSet, RecordSetError> {
    match record_type {
        RecordType::A => a_record_set(ttl, values),
        RecordType::Aaaa => aaaa_record_set(ttl, values),
        RecordType::Caa => caa_record_set(ttl, values),
        RecordType::Txt => Ok(txt_record_set(ttl, values)),
        RecordType::Cname => Err(RecordSetError::UnsupportedRecordType(
            RecordType::Cname.to_string(),
        )),
    }
}

/// One IPv4 address per value. IPv6 literals are rejected.
pub fn a_record_set(ttl: u32, values: &[String]) -> Result<RecordSet, RecordSetError> {
    let mut records = Vec::with_capacity(values.len());
    for addr in values {
        if addr.parse::<Ipv4Addr>().is_err() {
            return Err(RecordSetError::InvalidAddress(addr.clone()));
        }
        records.push(ARecord {
            ipv4_address: addr.clone(),
        });
    }

    Ok(RecordSet::new(RecordSetProperties {
        ttl: Some(ttl),
        a_records: Some(records),
        ..Default::default()
    }))
}

/// One IPv6 address per value. The 16-byte form is required, so IPv4
/// literals are rejected rather than silently mapped.
pub fn aaaa_record_set(ttl: u32, values: &[String]) -> Result<RecordSet, RecordSetError> {
    let mut records = Vec::with_capacity(values.len());
    for addr in values {
        if addr.parse::<Ipv6Addr>().is_err() {
            return Err(RecordSetError::InvalidAddress(addr.clone()));
        }
        records.push(AaaaRecord {
            ipv6_address: addr.clone(),
        });
    }

    Ok(RecordSet::new(RecordSetProperties {
        ttl: Some(ttl),
        aaaa_records: Some(records),
        ..Default::default()
    }))
}

/// Values are consumed in groups of three: flags, tag, value. A leftover
/// group is an error, not a truncation. Flags must fit in [0, 255];
/// tag and value pass through untouched.
pub fn caa_record_set(ttl: u32, values: &[String]) -> Result<RecordSet, RecordSetError> {
    let mut records = Vec::with_capacity(values.len() / 3);
    for group in values.chunks(3) {
        let [flags, tag, value] = group else {
            return Err(RecordSetError::IncompleteRecord(group.to_vec()));
        };

        let flags: u8 = flags
            .parse()
            .map_err(|_| RecordSetError::InvalidFlags(flags.clone()))?;

        records.push(CaaRecord {
            flags,
            tag: tag.clone(),
            value: value.clone(),
        });
    }

    Ok(RecordSet::new(RecordSetProperties {
        ttl: Some(ttl),
        caa_records: Some(records),
        ..Default::default()
    }))
}

/// One entry per value, each carrying exactly one text line. The provider
/// enforces chunking and length limits, not this client.
pub fn txt_record_set(ttl: u32, values: &[String]) -> RecordSet {
    let records = values
        .iter()
        .map(|value| TxtRecord {
            value: vec![value.clone()],
        })
        .collect();

    RecordSet::new(RecordSetProperties {
        ttl: Some(ttl),
        txt_records: Some(records),
        ..Default::default()
    })
}

/// Render a fetched record set as the lines `get` prints: one address or
/// value per line, CAA as `flags tag "value"`. A set carrying no values
/// of the requested type falls back to its serialized properties.
pub fn render(record_type: RecordType, set: &RecordSet) -> Result<String, serde_json::Error> {
    let props = &set.properties;
    let mut lines = Vec::new();

    match record_type {
        RecordType::A => {
            if let Some(records) = &props.a_records {
                lines.extend(records.iter().map(|r| r.ipv4_address.clone()));
            }
        }
        RecordType::Aaaa => {
            if let Some(records) = &props.aaaa_records {
                lines.extend(records.iter().map(|r| r.ipv6_address.clone()));
            }
        }
        RecordType::Caa => {
            if let Some(records) = &props.caa_records {
                lines.extend(
                    records
                        .iter()
                        .map(|r| format!("{} {} {:?}", r.flags, r.tag, r.value)),
                );
            }
        }
        RecordType::Cname => {
            if let Some(record) = &props.cname_record {
                lines.push(record.cname.clone());
            }
        }
        RecordType::Txt => {
            if let Some(records) = &props.txt_records {
                for record in records {
                    lines.extend(record.value.iter().cloned());
                }
            }
        }
    }

    if lines.is_empty() && !has_values_for(record_type, props) {
        return serde_json::to_string(props);
    }

    Ok(lines.join("\n"))
}

fn has_values_for(record_type: RecordType, props: &RecordSetProperties) -> bool {
    match record_type {
        RecordType::A => props.a_records.is_some(),
        RecordType::Aaaa => props.aaaa_records.is_some(),
        RecordType::Caa => props.caa_records.is_some(),
        RecordType::Cname => props.cname_record.is_some(),
        RecordType::Txt => props.txt_records.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn record_type_parsing_is_case_insensitive() {
        assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("AAAA".parse::<RecordType>().unwrap(), RecordType::Aaaa);
        assert_eq!("caa".parse::<RecordType>().unwrap(), RecordType::Caa);
        assert_eq!("Cname".parse::<RecordType>().unwrap(), RecordType::Cname);
        assert_eq!("txt".parse::<RecordType>().unwrap(), RecordType::Txt);
    }

    #[test]
    fn record_type_parsing_rejects_unknown_tokens() {
        assert_eq!(
            "ns".parse::<RecordType>(),
            Err(RecordSetError::UnsupportedRecordType("NS".to_string()))
        );
    }

    #[test]
    fn a_records_accept_ipv4() {
        let set = a_record_set(300, &strings(&["1.1.1.1", "2.2.2.2"])).unwrap();
        assert_eq!(set.properties.ttl, Some(300));
        let records = set.properties.a_records.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ipv4_address, "1.1.1.1");
        assert_eq!(records[1].ipv4_address, "2.2.2.2");
    }

    #[test]
    fn a_records_reject_ipv6_and_garbage() {
        assert_eq!(
            a_record_set(300, &strings(&["::1"])),
            Err(RecordSetError::InvalidAddress("::1".to_string()))
        );
        assert_eq!(
            a_record_set(300, &strings(&["1.1.1.1", "not-an-ip"])),
            Err(RecordSetError::InvalidAddress("not-an-ip".to_string()))
        );
    }

    #[test]
    fn aaaa_records_accept_ipv6() {
        let set = aaaa_record_set(600, &strings(&["::1", "2001:db8::1"])).unwrap();
        assert_eq!(set.properties.ttl, Some(600));
        let records = set.properties.aaaa_records.unwrap();
        assert_eq!(records[0].ipv6_address, "::1");
        assert_eq!(records[1].ipv6_address, "2001:db8::1");
    }

    #[test]
    fn aaaa_records_reject_ipv4_literals() {
        assert_eq!(
            aaaa_record_set(300, &strings(&["1.1.1.1"])),
            Err(RecordSetError::InvalidAddress("1.1.1.1".to_string()))
        );
    }

    #[test]
    fn caa_records_group_values_in_threes() {
        let set = caa_record_set(
            300,
            &strings(&["0", "issue", "letsencrypt.org", "128", "issuewild", ";"]),
        )
        .unwrap();
        let records = set.properties.caa_records.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].flags, 0);
        assert_eq!(records[0].tag, "issue");
        assert_eq!(records[0].value, "letsencrypt.org");
        assert_eq!(records[1].flags, 128);
        assert_eq!(records[1].tag, "issuewild");
        assert_eq!(records[1].value, ";");
    }

    #[test]
    fn caa_records_report_the_leftover_group() {
        assert_eq!(
            caa_record_set(300, &strings(&["0", "issue"])),
            Err(RecordSetError::IncompleteRecord(strings(&["0", "issue"])))
        );
        assert_eq!(
            caa_record_set(
                300,
                &strings(&["0", "issue", "letsencrypt.org", "255"])
            ),
            Err(RecordSetError::IncompleteRecord(strings(&["255"])))
        );
    }

    #[test]
    fn caa_flags_must_fit_in_a_byte() {
        for flags in ["256", "-1", "issue"] {
            assert_eq!(
                caa_record_set(300, &strings(&[flags, "issue", "x"])),
                Err(RecordSetError::InvalidFlags(flags.to_string())),
                "flags {flags:?}"
            );
        }
        let set = caa_record_set(300, &strings(&["255", "issue", "x"])).unwrap();
        assert_eq!(set.properties.caa_records.unwrap()[0].flags, 255);
    }

    #[test]
    fn txt_records_wrap_each_value_in_a_single_line() {
        let set = txt_record_set(300, &strings(&["a", "b"]));
        let records = set.properties.txt_records.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, vec!["a".to_string()]);
        assert_eq!(records[1].value, vec!["b".to_string()]);
    }

    #[test]
    fn build_rejects_cname_construction() {
        assert_eq!(
            build(RecordType::Cname, 300, &strings(&["target.example.net"])),
            Err(RecordSetError::UnsupportedRecordType("CNAME".to_string()))
        );
    }

    #[test]
    fn payload_uses_the_provider_field_names() {
        let set = a_record_set(300, &strings(&["1.1.1.1"])).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["properties"]["TTL"], 300);
        assert_eq!(json["properties"]["ARecords"][0]["ipv4Address"], "1.1.1.1");
        assert!(json["properties"].get("TXTRecords").is_none());

        let set = caa_record_set(300, &strings(&["0", "issue", "ca.example.net"])).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["properties"]["CAARecords"][0]["flags"], 0);
        assert_eq!(json["properties"]["CAARecords"][0]["tag"], "issue");
    }

    #[test]
    fn render_prints_one_value_per_line() {
        let set = a_record_set(300, &strings(&["1.1.1.1", "2.2.2.2"])).unwrap();
        assert_eq!(render(RecordType::A, &set).unwrap(), "1.1.1.1\n2.2.2.2");

        let set = txt_record_set(300, &strings(&["hello", "world"]));
        assert_eq!(render(RecordType::Txt, &set).unwrap(), "hello\nworld");
    }

    #[test]
    fn render_quotes_caa_values() {
        let set = caa_record_set(300, &strings(&["0", "issue", "letsencrypt.org"])).unwrap();
        assert_eq!(
            render(RecordType::Caa, &set).unwrap(),
            "0 issue \"letsencrypt.org\""
        );
    }

    #[test]
    fn render_falls_back_to_serialized_properties() {
        let set = RecordSet::new(RecordSetProperties {
            ttl: Some(300),
            ..Default::default()
        });
        let out = render(RecordType::A, &set).unwrap();
        assert_eq!(out, r#"{"TTL":300}"#);
    }
}

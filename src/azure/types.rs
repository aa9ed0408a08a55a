use serde::{Deserialize, Serialize};

/// A record set as the Azure DNS management API (2018-05-01) represents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>, // "/subscriptions/.../dnsZones/example.com/A/www"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>, // "www" or "@"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>, // "Microsoft.Network/dnszones/A"
    pub properties: RecordSetProperties,
}

impl RecordSet {
    pub fn new(properties: RecordSetProperties) -> Self {
        Self {
            id: None,
            name: None,
            record_type: None,
            properties,
        }
    }
}

/// TTL plus one optional value list per record type. Azure returns only
/// the list matching the set's type; on PUT only the populated list is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSetProperties {
    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(rename = "ARecords", default, skip_serializing_if = "Option::is_none")]
    pub a_records: Option<Vec<ARecord>>,
    #[serde(rename = "AAAARecords", default, skip_serializing_if = "Option::is_none")]
    pub aaaa_records: Option<Vec<AaaaRecord>>,
    #[serde(rename = "CNAMERecord", default, skip_serializing_if = "Option::is_none")]
    pub cname_record: Option<CnameRecord>,
    #[serde(rename = "CAARecords", default, skip_serializing_if = "Option::is_none")]
    pub caa_records: Option<Vec<CaaRecord>>,
    #[serde(rename = "TXTRecords", default, skip_serializing_if = "Option::is_none")]
    pub txt_records: Option<Vec<TxtRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ARecord {
    #[serde(rename = "ipv4Address")]
    pub ipv4_address: String, // "192.0.2.1"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AaaaRecord {
    #[serde(rename = "ipv6Address")]
    pub ipv6_address: String, // "2001:db8::1"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnameRecord {
    pub cname: String, // "target.example.net"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaaRecord {
    pub flags: u8,
    pub tag: String, // "issue", "issuewild", "iodef"
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxtRecord {
    pub value: Vec<String>, // one string per 255-octet chunk
}

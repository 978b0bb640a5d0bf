//! EIP-712 Typed Data Hashing
//!
//! Ethereum EIP-712 표준에 따른 구조화된 데이터 인코딩을 제공합니다.
//! Paradex 계정 파생 시 L1 키가 서명하는 `STARK Key` 메시지에 사용됩니다.
//!
//! # 참조
//!
//! - [EIP-712: Typed structured data hashing and signing](https://eips.ethereum.org/EIPS/eip-712)

use super::keccak::{keccak256, pad_u256};
use crate::errors::{ParadexError, ParadexResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// EIP-712 도메인 분리자
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Domain {
    /// 도메인 이름 (e.g., "Paradex")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 도메인 버전 (e.g., "1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// L1 체인 ID (e.g., 11155111 for Sepolia)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl Eip712Domain {
    /// 새 도메인 생성
    pub fn new(name: impl Into<String>, version: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            chain_id: Some(chain_id),
        }
    }

    /// 도메인 타입 문자열 생성 (EIP712Domain(...))
    pub fn encode_type(&self) -> String {
        let mut fields = Vec::new();

        if self.name.is_some() {
            fields.push("string name");
        }
        if self.version.is_some() {
            fields.push("string version");
        }
        if self.chain_id.is_some() {
            fields.push("uint256 chainId");
        }

        format!("EIP712Domain({})", fields.join(","))
    }

    /// 도메인 분리자 해시 계산
    pub fn separator(&self) -> [u8; 32] {
        let type_hash = keccak256(self.encode_type().as_bytes());

        let mut encoded = Vec::with_capacity(32 * 4);
        encoded.extend_from_slice(&type_hash);

        if let Some(ref name) = self.name {
            encoded.extend_from_slice(&keccak256(name.as_bytes()));
        }
        if let Some(ref version) = self.version {
            encoded.extend_from_slice(&keccak256(version.as_bytes()));
        }
        if let Some(chain_id) = self.chain_id {
            encoded.extend_from_slice(&pad_u256(chain_id));
        }

        keccak256(&encoded)
    }
}

/// EIP-712 필드 타입 정의
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedDataField {
    /// 필드 이름
    pub name: String,
    /// 필드 타입 (`string` 또는 정의된 구조체 이름)
    #[serde(rename = "type")]
    pub field_type: String,
}

impl TypedDataField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// EIP-712 타입 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712TypedData {
    /// 타입 정의 (도메인 제외)
    pub types: BTreeMap<String, Vec<TypedDataField>>,

    /// 주 타입 이름
    pub primary_type: String,

    /// 도메인
    pub domain: Eip712Domain,

    /// 메시지 데이터
    pub message: serde_json::Value,
}

impl Eip712TypedData {
    /// 새 타입 데이터 생성
    pub fn new(
        domain: Eip712Domain,
        primary_type: impl Into<String>,
        types: BTreeMap<String, Vec<TypedDataField>>,
        message: serde_json::Value,
    ) -> Self {
        Self {
            types,
            primary_type: primary_type.into(),
            domain,
            message,
        }
    }

    /// 메시지 구조체 해시 계산
    pub fn hash_struct(&self) -> ParadexResult<[u8; 32]> {
        self.hash_struct_internal(&self.primary_type, &self.message)
    }

    /// 전체 서명 해시 계산
    ///
    /// keccak256("\x19\x01" || domainSeparator || hashStruct(message))
    pub fn sign_hash(&self) -> ParadexResult<[u8; 32]> {
        let domain_separator = self.domain.separator();
        let struct_hash = self.hash_struct()?;

        let mut data = Vec::with_capacity(2 + 32 + 32);
        data.push(0x19);
        data.push(0x01);
        data.extend_from_slice(&domain_separator);
        data.extend_from_slice(&struct_hash);

        Ok(keccak256(&data))
    }

    fn hash_struct_internal(
        &self,
        type_name: &str,
        data: &serde_json::Value,
    ) -> ParadexResult<[u8; 32]> {
        let type_hash = keccak256(encode_type(type_name, &self.types)?.as_bytes());
        let mut encoded = type_hash.to_vec();

        let fields = self
            .types
            .get(type_name)
            .ok_or_else(|| ParadexError::signing(format!("Type not found: {type_name}")))?;

        for field in fields {
            let value = data
                .get(&field.name)
                .ok_or_else(|| ParadexError::signing(format!("Field not found: {}", field.name)))?;

            let encoded_value = self.encode_value(&field.field_type, value)?;
            encoded.extend_from_slice(&encoded_value);
        }

        Ok(keccak256(&encoded))
    }

    fn encode_value(&self, field_type: &str, value: &serde_json::Value) -> ParadexResult<[u8; 32]> {
        match field_type {
            "string" => {
                let s = value
                    .as_str()
                    .ok_or_else(|| ParadexError::signing(format!("Expected string, got {value:?}")))?;
                Ok(keccak256(s.as_bytes()))
            },
            t if self.types.contains_key(t) => self.hash_struct_internal(t, value),
            other => Err(ParadexError::signing(format!("Unsupported type: {other}"))),
        }
    }
}

/// 타입 인코딩 문자열 생성
///
/// 주 타입 뒤에 참조되는 타입들을 알파벳 순으로 붙입니다.
pub fn encode_type(
    type_name: &str,
    types: &BTreeMap<String, Vec<TypedDataField>>,
) -> ParadexResult<String> {
    let mut deps = Vec::new();
    collect_dependencies(type_name, types, &mut deps);
    deps.sort();

    let mut result = format_type(type_name, types)?;
    for dep in deps.iter().filter(|d| d.as_str() != type_name) {
        result.push_str(&format_type(dep, types)?);
    }

    Ok(result)
}

fn format_type(type_name: &str, types: &BTreeMap<String, Vec<TypedDataField>>) -> ParadexResult<String> {
    let fields = types
        .get(type_name)
        .ok_or_else(|| ParadexError::signing(format!("Type not found: {type_name}")))?;

    let field_strings: Vec<String> = fields
        .iter()
        .map(|f| format!("{} {}", f.field_type, f.name))
        .collect();

    Ok(format!("{}({})", type_name, field_strings.join(",")))
}

fn collect_dependencies(
    type_name: &str,
    types: &BTreeMap<String, Vec<TypedDataField>>,
    deps: &mut Vec<String>,
) {
    if deps.iter().any(|d| d == type_name) {
        return;
    }
    let Some(fields) = types.get(type_name) else {
        return;
    };

    deps.push(type_name.to_string());
    for field in fields {
        if types.contains_key(field.field_type.as_str()) {
            collect_dependencies(&field.field_type, types, deps);
        }
    }
}

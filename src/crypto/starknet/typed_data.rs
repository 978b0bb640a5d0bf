//! StarkNet Typed Data Hashing (SNIP-12 revision 0)
//!
//! Paradex가 검증하는 레거시 StarkNet 타입 데이터 해시를 제공합니다.
//! EIP-712와 유사하지만 Pedersen 해시(`compute_hash_on_elements`)를 사용하고,
//! 최종 해시에 계정 주소가 들어갑니다.
//!
//! # 참조
//!
//! - [SNIP-12: Off-chain signing](https://github.com/starknet-io/SNIPs/blob/main/SNIPS/snip-12.md)

use super::hash::{compute_hash_on_elements, encode_felt_value, get_selector_from_name, short_string_to_felt};
use crate::errors::{ParadexError, ParadexResult};
use serde::{Deserialize, Serialize};
use starknet_types_core::felt::Felt;
use std::collections::BTreeMap;

/// 도메인 타입 이름
pub const DOMAIN_TYPE: &str = "StarkNetDomain";

/// 최종 해시 접두사
pub const MESSAGE_PREFIX: &str = "StarkNet Message";

/// StarkNet 도메인 분리자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkNetDomain {
    pub name: String,
    pub chain_id: String,
    pub version: String,
}

impl StarkNetDomain {
    pub fn new(name: impl Into<String>, version: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain_id: chain_id.into(),
            version: version.into(),
        }
    }

    /// `StarkNetDomain(name:felt,chainId:felt,version:felt)`
    pub fn encode_type() -> String {
        format!("{DOMAIN_TYPE}(name:felt,chainId:felt,version:felt)")
    }

    /// 도메인 구조체 해시
    pub fn hash(&self) -> ParadexResult<Felt> {
        Ok(compute_hash_on_elements(&[
            get_selector_from_name(&Self::encode_type()),
            encode_felt_value(&self.name)?,
            short_string_to_felt(&self.chain_id)?,
            encode_felt_value(&self.version)?,
        ]))
    }
}

/// 필드 정의
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarkNetTypedDataField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl StarkNetTypedDataField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }

    /// felt 필드
    pub fn felt(name: impl Into<String>) -> Self {
        Self::new(name, "felt")
    }
}

/// StarkNet 타입 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkNetTypedData {
    pub types: BTreeMap<String, Vec<StarkNetTypedDataField>>,
    pub primary_type: String,
    pub domain: StarkNetDomain,
    pub message: serde_json::Value,
}

impl StarkNetTypedData {
    pub fn new(
        domain: StarkNetDomain,
        primary_type: impl Into<String>,
        types: BTreeMap<String, Vec<StarkNetTypedDataField>>,
        message: serde_json::Value,
    ) -> Self {
        Self {
            types,
            primary_type: primary_type.into(),
            domain,
            message,
        }
    }

    /// `Name(field:type,...)` (선언 순서 유지)
    pub fn encode_type(&self, type_name: &str) -> ParadexResult<String> {
        let fields = self.fields(type_name)?;
        let field_strings: Vec<String> = fields
            .iter()
            .map(|f| format!("{}:{}", f.name, f.field_type))
            .collect();

        Ok(format!("{}({})", type_name, field_strings.join(",")))
    }

    /// 타입 해시 = starknet_keccak(encode_type)
    pub fn type_hash(&self, type_name: &str) -> ParadexResult<Felt> {
        Ok(get_selector_from_name(&self.encode_type(type_name)?))
    }

    /// 주 타입 구조체 해시
    pub fn struct_hash(&self) -> ParadexResult<Felt> {
        self.hash_struct(&self.primary_type, &self.message)
    }

    /// 서명 대상 해시
    ///
    /// `H("StarkNet Message", H(domain), account, H(message))`
    pub fn message_hash(&self, account_address: &Felt) -> ParadexResult<Felt> {
        Ok(compute_hash_on_elements(&[
            short_string_to_felt(MESSAGE_PREFIX)?,
            self.domain.hash()?,
            *account_address,
            self.struct_hash()?,
        ]))
    }

    fn fields(&self, type_name: &str) -> ParadexResult<&[StarkNetTypedDataField]> {
        self.types
            .get(type_name)
            .map(Vec::as_slice)
            .ok_or_else(|| ParadexError::signing(format!("Type not found: {type_name}")))
    }

    fn hash_struct(&self, type_name: &str, data: &serde_json::Value) -> ParadexResult<Felt> {
        let mut values = vec![self.type_hash(type_name)?];

        for field in self.fields(type_name)? {
            let value = data
                .get(&field.name)
                .ok_or_else(|| ParadexError::signing(format!("Field not found: {}", field.name)))?;
            values.push(self.encode_value(&field.field_type, value)?);
        }

        Ok(compute_hash_on_elements(&values))
    }

    fn encode_value(&self, field_type: &str, value: &serde_json::Value) -> ParadexResult<Felt> {
        match (field_type, value) {
            ("felt", serde_json::Value::String(s)) => encode_felt_value(s),
            ("felt", serde_json::Value::Number(n)) => n
                .as_u64()
                .map(Felt::from)
                .ok_or_else(|| ParadexError::signing(format!("Number out of felt range: {n}"))),
            (t, v) if self.types.contains_key(t) => self.hash_struct(t, v),
            (t, v) => Err(ParadexError::signing(format!(
                "Unsupported field type {t} for value {v}"
            ))),
        }
    }
}

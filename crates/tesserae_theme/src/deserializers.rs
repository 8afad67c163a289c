use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

use crate::{Breakpoint, Breakpoints, Length, TokenCategory, TokenValue};

pub fn de_pixels<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<f32>() {
                Ok(pixels) => Ok(pixels),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => Ok(pixels),
    }
}

pub fn de_length<'de, D>(deserializer: D) -> Result<Length, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(num) => Ok(Length::Px(num)),

        StringOrFloat::String(string) => Length::parse(&string).ok_or_else(|| {
            D::Error::custom(
                "expected f32 or string containing a f32 ending with 'rem', 'px' or '%'",
            )
        }),
    }
}

pub fn de_breakpoints<'de, D>(deserializer: D) -> Result<Breakpoints, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Raw {
        #[serde(deserialize_with = "de_pixels")]
        base: f32,
        #[serde(deserialize_with = "de_pixels")]
        sm: f32,
        #[serde(deserialize_with = "de_pixels")]
        md: f32,
        #[serde(deserialize_with = "de_pixels")]
        lg: f32,
        #[serde(deserialize_with = "de_pixels")]
        xl: f32,
    }

    let raw = Raw::deserialize(deserializer)?;
    let min_widths = [raw.base, raw.sm, raw.md, raw.lg, raw.xl];

    if min_widths[0] < 0. {
        return Err(D::Error::custom("breakpoint 'base' can't be negative."));
    }

    for (i, pair) in min_widths.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(D::Error::custom(format!(
                "breakpoint '{}' must be wider than '{}'.",
                Breakpoint::ALL[i + 1].key(),
                Breakpoint::ALL[i].key()
            )));
        }
    }

    Ok(Breakpoints::from_min_widths(min_widths))
}

pub fn de_token_groups<'de, D>(deserializer: D) -> Result<IndexMap<String, TokenValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = IndexMap::<String, Value>::deserialize(deserializer)?;
    let mut tokens = IndexMap::new();

    for (key, group) in groups {
        let category = TokenCategory::from_key(&key)
            .ok_or_else(|| D::Error::custom(format!("unknown token category '{key}'.")))?;

        flatten_group(category.key(), &group, &mut tokens).map_err(D::Error::custom)?;
    }

    Ok(tokens)
}

fn flatten_group(
    prefix: &str,
    value: &Value,
    tokens: &mut IndexMap<String, TokenValue>,
) -> Result<(), String> {
    match value {
        Value::Object(children) => {
            for (key, child) in children {
                flatten_group(&format!("{prefix}.{key}"), child, tokens)?;
            }
            Ok(())
        }

        Value::String(raw) => {
            let token = TokenValue::parse(raw).map_err(|e| format!("token '{prefix}': {e}"))?;
            tokens.insert(prefix.to_string(), token);
            Ok(())
        }

        Value::Number(number) => {
            let number = number
                .as_f64()
                .ok_or_else(|| format!("token '{prefix}' is not a finite number"))?;
            tokens.insert(prefix.to_string(), TokenValue::Number(number as f32));
            Ok(())
        }

        _ => Err(format!(
            "token '{prefix}' must be a string, a number or a group of tokens"
        )),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

use std::str::FromStr;

use solana_program::pubkey::Pubkey;

use crate::ActionError;

/// Raw query string of a take request. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TakeQuery {
    pub escrow: Option<String>,
    pub maker: Option<String>,
    pub mint_a: Option<String>,
    pub mint_b: Option<String>,
}

/// First occurrence of a repeated key wins, unknown keys are ignored.
impl FromIterator<(String, String)> for TakeQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "escrow" => &mut query.escrow,
                "maker" => &mut query.maker,
                "mintA" => &mut query.mint_a,
                "mintB" => &mut query.mint_b,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// The escrow being taken and the accounts it was made with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscrowParams {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
}

impl TakeQuery {
    /// Parse each parameter, substituting `default` for any that is missing
    /// or empty. Fails on the first malformed parameter, in query order.
    pub fn validate(&self, default: &Pubkey) -> Result<EscrowParams, ActionError> {
        Ok(EscrowParams {
            escrow: parse_param("escrow", self.escrow.as_deref(), default)?,
            maker: parse_param("maker", self.maker.as_deref(), default)?,
            mint_a: parse_param("mintA", self.mint_a.as_deref(), default)?,
            mint_b: parse_param("mintB", self.mint_b.as_deref(), default)?,
        })
    }
}

#[inline]
fn parse_param(
    name: &'static str,
    value: Option<&str>,
    default: &Pubkey,
) -> Result<Pubkey, ActionError> {
    match value {
        None | Some("") => Ok(*default),
        Some(value) => {
            Pubkey::from_str(value).map_err(|_| ActionError::InvalidQueryParameter(name))
        }
    }
}

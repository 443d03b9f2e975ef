use crate::entities::coupon_entity as coupons;
use crate::error::{AppError, AppResult};
use rand::Rng;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// 品牌前缀 (Golden Fortune)
pub const COUPON_CODE_PREFIX: &str = "GF";

/// 32 个易辨认字符，去掉了 0/O、1/I 等易混淆字符
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const RANDOM_LEN: usize = 6;

/// 生成一个 8 位兑换码: GF + 6 位随机字符。
/// 仅负责生成，不保证唯一；入库前用 generate_unique_coupon_code 查重。
pub fn generate_coupon_code() -> String {
    let mut rng = rand::thread_rng();
    let mut code = String::with_capacity(COUPON_CODE_PREFIX.len() + RANDOM_LEN);
    code.push_str(COUPON_CODE_PREFIX);
    for _ in 0..RANDOM_LEN {
        code.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    code
}

/// 生成一个在 coupons 表中唯一的兑换码。
/// code 是唯一查找键，碰撞概率约 1/32^6，低但非零，因此生成后必须查重；
/// 连续 5 次碰撞基本只可能是码空间被打满，按配置错误处理。
pub async fn generate_unique_coupon_code<C: ConnectionTrait>(conn: &C) -> AppResult<String> {
    const MAX_ATTEMPTS: usize = 5;

    for _ in 0..MAX_ATTEMPTS {
        let code = generate_coupon_code();

        let exists = coupons::Entity::find()
            .filter(coupons::Column::Code.eq(code.clone()))
            .count(conn)
            .await?;

        if exists == 0 {
            return Ok(code);
        }
        log::warn!("Coupon code collision, regenerating");
    }

    Err(AppError::InvalidConfiguration(
        "Failed to generate a unique coupon code".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        let code = generate_coupon_code();
        assert_eq!(code.len(), 8);
        assert!(code.starts_with("GF"));
        assert!(
            code[2..]
                .bytes()
                .all(|b| ALPHABET.contains(&b))
        );
    }

    #[test]
    fn test_alphabet_excludes_confusable_chars() {
        for confusable in [b'0', b'O', b'1', b'I'] {
            assert!(!ALPHABET.contains(&confusable));
        }
        assert_eq!(ALPHABET.len(), 32);
    }

    #[test]
    fn test_codes_only_uppercase_and_digits() {
        for _ in 0..100 {
            let code = generate_coupon_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }
}

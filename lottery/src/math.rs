use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

// a * b / c with a 256-bit intermediate, truncating toward zero
pub fn mul_div(a: u128, b: u128, c: u128) -> u128 {
    (U256::from(a) * U256::from(b) / U256::from(c)).as_u128()
}

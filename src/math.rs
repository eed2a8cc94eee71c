pub type Real = f32;

/// Cubic Hermite ease: `t²(3 - 2t)`, zero first derivative at both ends.
#[inline(always)]
pub fn smoothstep(t: Real) -> Real {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn smoothstep_clamps_out_of_range() {
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(3.0), 1.0);
    }
}

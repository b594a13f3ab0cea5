// Closed-form conversions behind the real-world calculators and quiz scenarios

pub fn time_to_multiply(rate: f64, factor: f64) -> Option<f64> {
    if factor <= 0.0 || rate <= -1.0 {
        return None;
    }
    // Nothing changes at a zero rate, so only the trivial target is reachable
    if rate == 0.0 {
        if factor == 1.0 {
            return Some(0.0);
        }
        return None;
    }
    return Some(factor.ln() / (1.0 + rate).ln());
}

pub fn ph_from_concentration(concentration: f64) -> Option<f64> {
    if concentration <= 0.0 {
        return None;
    }
    return Some(-concentration.log10());
}

pub fn concentration_from_ph(ph: f64) -> f64 {
    return 10f64.powf(-ph);
}

pub fn decibel_change(intensity_ratio: f64) -> Option<f64> {
    if intensity_ratio <= 0.0 {
        return None;
    }
    return Some(10.0 * intensity_ratio.log10());
}

pub fn intensity_ratio_from_decibels(decibels: f64) -> f64 {
    return 10f64.powf(decibels / 10.0);
}

pub fn magnitude_difference(amplitude_ratio: f64) -> Option<f64> {
    if amplitude_ratio <= 0.0 {
        return None;
    }
    return Some(amplitude_ratio.log10());
}

// The Richter energy relation is E ∝ 10^(1.5·M)
pub fn magnitude_energy_difference(energy_ratio: f64) -> Option<f64> {
    if energy_ratio <= 0.0 {
        return None;
    }
    return Some(energy_ratio.log10() / 1.5);
}

pub mod applications;

#[cfg(test)]
mod tests_properties;

use std::f64::consts::E;

pub fn log_base(x: f64, base: f64) -> Option<f64> {
    if x <= 0.0 {
        return None;
    }
    if base <= 0.0 || base == 1.0 {
        return None;
    }

    // The direct primitives are more accurate than the change of base ratio,
    // and bases 10, e and 2 recur everywhere in the calculators and the quiz
    if base == E {
        return Some(x.ln());
    }
    if base == 10.0 {
        return Some(x.log10());
    }
    if base == 2.0 {
        return Some(x.log2());
    }
    return Some(x.ln() / base.ln());
}

pub(crate) fn log_symbol(base: f64) -> String {
    if base == E {
        return "ln".to_string();
    }
    if base == 10.0 {
        return "log".to_string();
    }
    if base == 2.0 {
        return "log₂".to_string();
    }
    return format!("log_{}", base);
}

pub fn explain_calculation(x: f64, base: f64) -> String {
    if x <= 0.0 {
        return format!(
            "Error: cannot compute the logarithm of {} because logarithms are only defined for positive numbers.",
            x
        );
    }
    if base <= 0.0 {
        return format!(
            "Error: cannot use {} as a logarithm base because the base must be positive.",
            base
        );
    }
    if base == 1.0 {
        return "Error: cannot use 1 as a logarithm base because it would lead to division by zero in the change of base formula.".to_string();
    }

    // The guards above are exactly log_base's own checks, so the value is always there
    let y = log_base(x, base).unwrap();

    let base_name = if base == E {
        "natural logarithm (base e)".to_string()
    } else if base == 10.0 {
        "common logarithm (base 10)".to_string()
    } else if base == 2.0 {
        "binary logarithm (base 2)".to_string()
    } else {
        format!("logarithm base {}", base)
    };
    let base_text = if base == E {
        "e".to_string()
    } else {
        format!("{}", base)
    };
    let notation = format!("{}({})", log_symbol(base), x);

    return format!(
        "Step-by-step calculation of {}:\n\n\
        1. The {} asks: \"To what power must {} be raised to get {}?\"\n\n\
        2. In other words, we are solving for y in the equation: {}^y = {}\n\n\
        3. Using logarithm rules, the answer is y = {:.6}\n\n\
        4. This means {}^{:.6} = {}\n\n\
        5. We can verify this: {}^{:.6} = {:.6} ≈ {}",
        notation,
        base_name,
        base_text,
        x,
        base_text,
        x,
        y,
        base_text,
        y,
        x,
        base_text,
        y,
        base.powf(y),
        x
    );
}

#[derive(Debug, Clone)]
pub enum Equation {
    ForArgument { base: f64, k: f64 },
    ForBase { k: f64, x: f64 },
    ForDuration { principal: f64, rate: f64, target: f64 },
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub value: Option<f64>,
    pub explanation: String,
}

impl Solution {
    pub fn new(value: Option<f64>, explanation: String) -> Self {
        Self { value, explanation }
    }
}

pub fn solve_equation(equation: Equation) -> Solution {
    match equation {
        Equation::ForArgument { base, k } => solve_for_argument(base, k),
        Equation::ForBase { k, x } => solve_for_base(k, x),
        Equation::ForDuration {
            principal,
            rate,
            target,
        } => solve_for_duration(principal, rate, target),
    }
}

fn solve_for_argument(base: f64, k: f64) -> Solution {
    if base <= 0.0 || base == 1.0 {
        return Solution::new(
            None,
            "Error: Base must be positive and not equal to 1.".to_string(),
        );
    }

    let solution = base.powf(k);
    let equation = format!("{}(x) = {}", log_symbol(base), k);

    let explanation = format!(
        "Solving {}:\n\n\
        1. We need to find x such that log_{}(x) = {}\n\n\
        2. Using the definition of logarithms, if log_{}(x) = {}, then {}^{} = x\n\n\
        3. Therefore, x = {}^{} = {}",
        equation, base, k, base, k, base, k, base, k, solution
    );

    return Solution::new(Some(solution), explanation);
}

fn solve_for_base(k: f64, x: f64) -> Solution {
    if k <= 0.0 {
        return Solution::new(
            None,
            "Error: The value inside the logarithm must be positive.".to_string(),
        );
    }
    // b^0 = 1 for any base, so a zero exponent leaves nothing to solve for
    if x == 0.0 {
        return Solution::new(
            Some(k),
            format!(
                "If log_b({}) = 0, then b^0 = {}, which is only true if {} = 1.",
                k, k, k
            ),
        );
    }

    let solution = k.powf(1.0 / x);

    let explanation = format!(
        "Solving log_b({}) = {} for b:\n\n\
        1. We need to find the base b such that log_b({}) = {}\n\n\
        2. Using the definition of logarithms, if log_b({}) = {}, then b^{} = {}\n\n\
        3. To solve for b, we raise both sides to the power of 1/{}:\n   b = {}^(1/{}) = {}",
        k, x, k, x, k, x, x, k, x, k, x, solution
    );

    return Solution::new(Some(solution), explanation);
}

fn solve_for_duration(principal: f64, rate: f64, target: f64) -> Solution {
    if principal <= 0.0 || target <= 0.0 {
        return Solution::new(
            None,
            "Error: Principal and target amounts must be positive.".to_string(),
        );
    }
    if rate <= -1.0 {
        return Solution::new(
            None,
            "Error: Rate cannot be less than or equal to -100%.".to_string(),
        );
    }
    if rate == 0.0 {
        if principal == target {
            return Solution::new(
                Some(0.0),
                "With a zero rate the amount remains constant, so the target is already reached.".to_string(),
            );
        }
        return Solution::new(
            None,
            "With a zero rate the amount never changes, so the principal will never reach the target.".to_string(),
        );
    }

    let ratio = target / principal;
    let growth = 1.0 + rate;
    let solution = ratio.ln() / growth.ln();

    let explanation = format!(
        "Solving for the time to grow from {} to {} at a rate of {} per period:\n\n\
        1. Start from the compound growth formula: A = P(1+r)^t, with A = {}, P = {}, r = {}\n\n\
        2. Divide both sides by P: A/P = (1+r)^t, so {} = {}^t\n\n\
        3. Take the logarithm of both sides: ln({}) = t × ln({})\n\n\
        4. Solve for t: t = ln({}) / ln({}) = {:.6} / {:.6} = {:.6}",
        principal,
        target,
        rate,
        target,
        principal,
        rate,
        ratio,
        growth,
        ratio,
        growth,
        ratio,
        growth,
        ratio.ln(),
        growth.ln(),
        solution
    );

    return Solution::new(Some(solution), explanation);
}

//// Physical constants
// S.I. units (m, kg, s) as used by the reference Cygnus X-1 case.
pub const G_SI : f64 = 6.67408e-11;  // m^3.kg^-1.s^-2
pub const M_SUN : f64 = 2e30; // kg (rounded, as used to seed the reference case)
pub const R_SUN : f64 = 7e8; // m (rounded)

//// Force model
pub const DEFAULT_DROPOFF : f64 = 2.; // Exponent of the attraction law (2 = Newtonian inverse-square)

//// Yoshida 8th order composition weights
// w0 = 1 - 2 * (w1 + w2 + w3 + w4 + w5 + w6 + w7)
pub const YOSHIDA8_W0 : f64 = 1.65899088454396;
pub const YOSHIDA8_W1 : f64 = 0.311790812418427e0;
pub const YOSHIDA8_W2 : f64 = -0.155946803821447e1;
pub const YOSHIDA8_W3 : f64 = -0.167896928259640e1;
pub const YOSHIDA8_W4 : f64 = 0.166335809963315e1;
pub const YOSHIDA8_W5 : f64 = -0.106458714789183e1;
pub const YOSHIDA8_W6 : f64 = 0.136934946416871e1;
pub const YOSHIDA8_W7 : f64 = 0.629030650210433e0;

// Velocity (kick) coefficients: symmetric palindrome of the weights
pub const YOSHIDA8_VELOCITY_COEFFICIENTS : [f64; 15] = [
    YOSHIDA8_W7, YOSHIDA8_W6, YOSHIDA8_W5, YOSHIDA8_W4, YOSHIDA8_W3, YOSHIDA8_W2, YOSHIDA8_W1,
    YOSHIDA8_W0,
    YOSHIDA8_W1, YOSHIDA8_W2, YOSHIDA8_W3, YOSHIDA8_W4, YOSHIDA8_W5, YOSHIDA8_W6, YOSHIDA8_W7,
];

// Position (drift) coefficients:
//   [w7/2, (w7+w6)/2, (w6+w5)/2, (w5+w4)/2, (w4+w3)/2, (w3+w2)/2, (w2+w1)/2, (w1+w0)/2,
//    (w1+w0)/2, (w2+w1)/2, (w3+w2)/2, (w4+w3)/2, (w5+w4)/2, (w6+w5)/2, (w7+w6)/2, w7/2]
// Reference values, not recomputed at runtime.
pub const YOSHIDA8_POSITION_COEFFICIENTS : [f64; 16] = [
    0.3145153251052165, 0.9991900571895715, 0.15238115813844, 0.29938547587066,
    -0.007805591481624963, -1.619218660405435, -0.6238386128980216, 0.9853908484811935,
    0.9853908484811935, -0.6238386128980216, -1.619218660405435, -0.007805591481624963,
    0.29938547587066, 0.15238115813844, 0.9991900571895715, 0.3145153251052165,
];

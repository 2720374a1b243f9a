//! Sprites compiled into the binary as base64 encoded 32x32 RGBA PNGs.

/// Hull of the ship, nose pointing up.
pub const SHIP_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAAg0lEQVR42u2WywmAMBBEU6fVWU7OFmEbSgRBQj7GZGYUd2DP7+1Aljhn+XK8X7Yw/xQ44TIJqUAMp0tIBXJwmsQVNs3rMTSBeNuUAFQiBae1kNue1kIJDm+htj28hTtwWAu1dw+/C1KBXni3hFRgFPyxhFRgNLxZQiqAgst/0BbLa7MDFJm9DhFe1UAAAAAASUVORK5CYII=";

/// Main engine flame, drawn while thrusting.
pub const BURN_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAAQklEQVR42mNgGAWjYBSMglEwCkbBKBgFo2AUjIJRQAL4P03uPxg/i8KOofID4wh6WI7TEfS0HMMRA2E5uiOGdMIGAOQZV22xAH3OAAAAAElFTkSuQmCC";

/// Right-hand bow thruster, drawn while turning left.
pub const LEFT_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAAOElEQVR42u3SwQkAIAwDwO4/o0O4geLXv0bhDvpOIK0CDul9tHXR8EiJPfx6iXiB+ARPPCEAAF+ZKtBZib7X7W0AAAAASUVORK5CYII=";

/// Left-hand bow thruster, drawn while turning right.
pub const RIGHT_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAAOUlEQVR42u3SsQkAIBADwN9/RodwA8XWxs4I3sHXCeSrgIPeR1sXDY+U2MOvl4gXiE/wxBMCAPCFCcGtWYkJMCR9AAAAAElFTkSuQmCC";

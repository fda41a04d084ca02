//! The MindSpace persona: the fixed behavioral prompt defining the
//! assistant's tone and safety rules.
//!
//! The persona is sent once per conversation, as a one-time system
//! instruction on the first turn only. Later turns rely on the caller
//! resending the conversation history. Held as a constructed value rather
//! than a bare module constant so tests can substitute their own text.

/// The default persona instructions, with one substitution point: the
/// user's display name is appended as `[User's Name] = <nickname>`.
pub const DEFAULT_PERSONA: &str = r#"Core Identity and Purpose:
You are "MindSpace," a calming mental wellness companion. Your role is to provide short (4-5 lines), soothing responses that console the user, help them feel safe, and gently guide them toward a positive mindset. You are not a therapist, but a comforting presence.

Key Behavioral Principles:
Critical Instruction : Respond in just 3-5 lines, not more than that.
1. **Consoling & Listening:** Acknowledge emotions with validating phrases like:
   * "I hear you, and I'm really glad you shared this."
   * "That sounds heavy, thank you for trusting me with it."
   * "Would you mind sharing a little more about what that feels like for you?"

2. **Minimal but Soothing:** Keep replies within 4-5 lines. Use soft, simple words that comfort without overwhelming.

3. **Positive Shift:** After consoling, gently guide the user toward hope or calm.
   * Examples: "It's okay to take this one moment at a time." / "You're showing strength just by opening up."

4. **Sensitive to Mental Health Issues:** If the user expresses suicidal thoughts, deep distress, or mental struggles, console first with empathy, then encourage safe, positive steps.

5. **Crisis Escalation (India-specific):** If the user expresses suicidal thoughts or extreme distress, always include this resource gently:
   * "I hear your pain, and it's really brave of you to share. Please remember you don't have to face this alone. You can reach out to the Helpline at 14416 for immediate support."

Your purpose: Start by asking how the user feels, console with empathy and listening, invite sharing, and gently shift toward a calmer, more hopeful outlook, always in 4-5 soothing lines."#;

/// Fallback display name when the caller supplies no nickname.
pub const DEFAULT_NICKNAME: &str = "friend";

/// Immutable persona configuration, initialized once at startup.
#[derive(Debug, Clone)]
pub struct Persona {
    instructions: String,
}

impl Persona {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
        }
    }

    /// The persona text without the name substitution applied.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Render the one-time system instruction for a first turn, with the
    /// user's display name interpolated.
    pub fn render(&self, nickname: Option<&str>) -> String {
        let name = match nickname {
            Some(n) if !n.trim().is_empty() => n,
            _ => DEFAULT_NICKNAME,
        };
        format!("{}\n\n[User's Name] = {}", self.instructions, name)
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_interpolates_nickname() {
        let persona = Persona::default();
        let rendered = persona.render(Some("Sam"));
        assert!(rendered.starts_with(DEFAULT_PERSONA));
        assert!(rendered.ends_with("[User's Name] = Sam"));
    }

    #[test]
    fn test_render_falls_back_to_default_nickname() {
        let persona = Persona::default();
        assert!(persona.render(None).ends_with("[User's Name] = friend"));
        assert!(persona.render(Some("  ")).ends_with("[User's Name] = friend"));
    }

    #[test]
    fn test_custom_instructions() {
        let persona = Persona::new("Be brief.");
        assert_eq!(persona.render(Some("Ada")), "Be brief.\n\n[User's Name] = Ada");
    }

    #[test]
    fn test_default_persona_contains_key_behavioral_rules() {
        assert!(DEFAULT_PERSONA.contains("MindSpace"));
        assert!(DEFAULT_PERSONA.contains("3-5 lines"));
        assert!(DEFAULT_PERSONA.contains("14416"));
    }
}

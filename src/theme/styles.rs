//! Global CSS styles for Onboard.
//!
//! Dark terminal palette; components only reference these class names.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0f1314;
  --void-border: #1f2426;

  /* MOSS GREEN (Success) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* CYAN (Links, Input, Primary action) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --danger-glow: rgba(255, 51, 102, 0.25);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-3xl: 2.5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-align: center;
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.08em;
  margin-bottom: 2rem;
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
  text-align: center;
}

/* === Auth Layout === */
.auth-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem 1rem;
}

.auth-card {
  width: 100%;
  max-width: 24rem;
  padding: 2rem 1.5rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 6px;
}

.auth-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.auth-footer {
  margin-top: 1.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.auth-link,
.legal-link {
  color: var(--cyan);
  text-decoration: none;
  border-bottom: 1px solid var(--cyan-glow);
}

.auth-link:hover,
.legal-link:hover {
  border-bottom-color: var(--cyan);
}

.legal-text {
  margin-top: 1rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
  text-align: center;
}

.form-error {
  color: var(--danger);
  font-size: var(--text-lg);
}

/* === Input Fields === */
.form-field {
  display: flex;
  flex-direction: column;
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--cyan);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: all 0.2s ease;
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 0 1px var(--cyan), 0 0 20px var(--cyan-glow);
}

.password-field {
  position: relative;
}

.input-with-toggle {
  padding-right: 2.75rem;
}

.visibility-toggle {
  position: absolute;
  top: 0;
  right: 0;
  height: 100%;
  padding: 0 0.875rem;
}

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 2rem;
  background: var(--cyan);
  border: 1px solid var(--cyan);
  border-radius: 4px;
  color: var(--void-black);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
  box-shadow: 0 6px 20px var(--cyan-glow);
  transition: all 0.3s ease;
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 24px var(--cyan-glow);
  transform: translateY(-1px);
}

.btn-full {
  width: 100%;
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn {
  display: flex;
  align-items: center;
  background: transparent;
  border: none;
  color: var(--text-secondary);
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--cyan);
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  top: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 1000;
  max-width: 20rem;
}

.toast {
  padding: 0.75rem 1rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-left-width: 4px;
  border-radius: 4px;
  font-size: var(--text-sm);
  cursor: pointer;
  animation: toast-in 0.2s ease;
}

.toast-success {
  border-left-color: var(--moss-glow);
}

.toast-error {
  border-left-color: var(--danger);
  box-shadow: 0 0 16px var(--danger-glow);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateX(1rem); }
  to { opacity: 1; transform: translateX(0); }
}
"#;

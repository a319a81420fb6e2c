//! Global CSS for the SACTIFI site.
//!
//! Dark "void" backgrounds with cyan/violet gradients. Palette variables
//! come from [`super::colors::root_variables`]; motion timings for reveals
//! and tilt live in inline styles generated by the core crate.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.5rem;
  --text-hero: clamp(3rem, 9vw, 6.5rem);

  --radius-sm: 8px;
  --radius: 16px;
  --radius-lg: 24px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;

  --navbar-height: 72px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  background: var(--void);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

::selection {
  background: var(--primary-glow);
}

/* === Page scroll container === */
.page {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
}

.page::-webkit-scrollbar {
  width: 8px;
}

.page::-webkit-scrollbar-thumb {
  background: var(--border-strong);
  border-radius: 4px;
}

.gradient-text {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Accents === */
.accent-primary { --card-accent: var(--primary); --card-glow: var(--primary-glow); }
.accent-secondary { --card-accent: var(--accent); --card-glow: var(--accent-glow); }
.accent-green { --card-accent: var(--green); --card-glow: var(--green-glow); }
.accent-danger { --card-accent: var(--danger); --card-glow: var(--danger-glow); }

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 8px;
  z-index: 100;
  height: var(--navbar-height);
  transition: background var(--transition-normal), border-color var(--transition-normal),
    backdrop-filter var(--transition-normal);
  border-bottom: 1px solid transparent;
}

.navbar--scrolled {
  background: rgba(5, 5, 8, 0.82);
  backdrop-filter: blur(16px);
  border-bottom-color: var(--border);
}

.navbar-inner {
  max-width: 1240px;
  height: 100%;
  margin: 0 auto;
  padding: 0 24px;
  display: flex;
  align-items: center;
  gap: 32px;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 10px;
  font-weight: 700;
  font-size: var(--text-lg);
  letter-spacing: 0.08em;
}

.brand-mark {
  display: grid;
  place-items: center;
  width: 36px;
  height: 36px;
  border-radius: 10px;
  background: var(--gradient);
  color: var(--void);
  font-weight: 800;
}

.navbar-links {
  display: flex;
  gap: 28px;
  margin-left: auto;
}

.nav-link {
  position: relative;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link-underline {
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 100%;
  height: 2px;
  background: var(--gradient);
  transform: scaleX(0);
  transform-origin: left;
  transition: transform var(--transition-normal);
}

.nav-link:hover .nav-link-underline {
  transform: scaleX(1);
}

.navbar-toggle {
  display: none;
}

.navbar-mobile {
  display: none;
  flex-direction: column;
  gap: 16px;
  padding: 24px;
  background: rgba(5, 5, 8, 0.96);
  border-bottom: 1px solid var(--border);
}

@media (max-width: 900px) {
  .navbar-links,
  .navbar-cta {
    display: none;
  }

  .navbar-toggle {
    display: inline-grid;
    margin-left: auto;
  }

  .navbar-mobile.open {
    display: flex;
  }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  padding: 12px 26px;
  border-radius: 999px;
  font-size: var(--text-sm);
  font-weight: 600;
  letter-spacing: 0.02em;
  transition: transform var(--transition-fast), box-shadow var(--transition-normal),
    background var(--transition-normal), border-color var(--transition-normal);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--gradient);
  color: var(--void);
  box-shadow: 0 0 24px var(--primary-glow);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 40px var(--primary-glow), 0 0 60px var(--accent-glow);
}

.btn-secondary {
  border: 1px solid var(--border-strong);
  background: var(--surface);
}

.btn-secondary:hover:not(:disabled) {
  border-color: var(--primary);
  background: var(--surface-hover);
}

.icon-btn,
.close-btn {
  display: inline-grid;
  place-items: center;
  width: 36px;
  height: 36px;
  border-radius: 10px;
  color: var(--text-secondary);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.icon-btn:hover,
.close-btn:hover {
  background: var(--surface-hover);
  color: var(--text-primary);
}

.close-btn {
  width: 28px;
  height: 28px;
  font-size: var(--text-sm);
}

.spinner {
  width: 14px;
  height: 14px;
  border: 2px solid rgba(5, 5, 8, 0.3);
  border-top-color: var(--void);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  padding: calc(var(--navbar-height) + 40px) 24px 80px;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.hero-grid {
  position: absolute;
  inset: 0;
  background-image:
    linear-gradient(var(--border) 1px, transparent 1px),
    linear-gradient(90deg, var(--border) 1px, transparent 1px);
  background-size: 64px 64px;
  mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
}

.hero-orb {
  position: absolute;
  width: 520px;
  height: 520px;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.45;
}

.hero-orb--primary {
  top: -120px;
  left: -120px;
  background: var(--primary-glow);
}

.hero-orb--accent {
  bottom: -160px;
  right: -120px;
  background: var(--accent-glow);
}

.binary-rain {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--primary);
}

.binary-column {
  position: absolute;
  top: -40%;
  writing-mode: vertical-rl;
  letter-spacing: 0.3em;
  animation-name: binary-fall;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

@keyframes binary-fall {
  from { transform: translateY(-20%); }
  to { transform: translateY(260%); }
}

.hero-content {
  position: relative;
  z-index: 1;
  max-width: 920px;
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 24px;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 10px;
  padding: 6px 16px;
  border: 1px solid var(--border-strong);
  border-radius: 999px;
  background: var(--surface);
  font-size: var(--text-xs);
  color: var(--text-secondary);
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.hero-badge-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--green);
  box-shadow: 0 0 10px var(--green);
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

.hero-title {
  font-size: var(--text-hero);
  font-weight: 800;
  letter-spacing: 0.06em;
  line-height: 1;
}

.hero-expansion {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-muted);
  letter-spacing: 0.12em;
  text-transform: uppercase;
}

.hero-tagline {
  font-size: var(--text-xl);
  color: var(--text-secondary);
  max-width: 720px;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 16px;
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 32px;
  margin-top: 32px;
}

.hero-stat {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.hero-stat-value {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.hero-stat-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.scroll-indicator {
  position: absolute;
  bottom: 32px;
  left: 50%;
  width: 26px;
  height: 42px;
  margin-left: -13px;
  border: 2px solid var(--border-strong);
  border-radius: 14px;
}

.scroll-indicator-dot {
  position: absolute;
  top: 8px;
  left: 50%;
  width: 4px;
  height: 8px;
  margin-left: -2px;
  border-radius: 2px;
  background: var(--primary);
  animation: scroll-hint 1.6s ease-in-out infinite;
}

@keyframes scroll-hint {
  0% { transform: translateY(0); opacity: 1; }
  100% { transform: translateY(14px); opacity: 0; }
}

/* === Reveal === */
.reveal,
.stagger-item {
  will-change: transform, opacity;
}

.reveal--visible {
  will-change: auto;
}

.text-reveal-word {
  display: inline-block;
  margin-right: 0.3em;
}

/* === Sections === */
.section {
  position: relative;
  max-width: 1240px;
  margin: 0 auto;
  padding: 120px 24px;
}

.section-header {
  max-width: 720px;
  margin: 0 auto 64px;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.section-eyebrow {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--primary);
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  line-height: 1.1;
}

.section-blurb {
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

/* === Cards === */
.interactive-card {
  position: relative;
  height: 100%;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  overflow: hidden;
  transform-style: preserve-3d;
  will-change: transform;
}

.interactive-card:hover {
  border-color: var(--card-accent, var(--border-strong));
  box-shadow: 0 20px 60px -20px var(--card-glow, var(--primary-glow));
}

.card-content {
  position: relative;
  z-index: 1;
  height: 100%;
  padding: 28px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.card-glare {
  position: absolute;
  inset: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.magnetic {
  display: inline-block;
  will-change: transform;
}

.about-body {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 48px;
  align-items: start;
}

.about-intro {
  display: flex;
  flex-direction: column;
  gap: 20px;
  color: var(--text-secondary);
  font-size: var(--text-lg);
}

.about-founder {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.feature-grid,
.sector-grid,
.team-grid {
  display: grid;
  gap: 24px;
}

.feature-grid {
  grid-template-columns: repeat(2, minmax(0, 1fr));
}

.sector-grid {
  grid-template-columns: repeat(3, minmax(0, 1fr));
}

.team-grid {
  grid-template-columns: repeat(4, minmax(0, 1fr));
  margin-top: 40px;
}

.feature-glyph,
.sector-glyph,
.team-avatar {
  display: grid;
  place-items: center;
  width: 52px;
  height: 52px;
  border-radius: 14px;
  font-size: var(--text-xl);
  background: var(--card-glow, var(--primary-glow));
  color: var(--card-accent, var(--primary));
}

.team-avatar {
  width: 72px;
  height: 72px;
  border-radius: 50%;
}

.feature-title,
.sector-title,
.team-name {
  font-size: var(--text-lg);
  font-weight: 600;
}

.feature-description,
.sector-description,
.team-description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.sector-more {
  margin-top: auto;
  font-size: var(--text-sm);
  color: var(--card-accent, var(--primary));
}

.team-role {
  font-size: var(--text-sm);
  color: var(--card-accent, var(--primary));
}

.team-circle {
  margin-top: auto;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-transform: uppercase;
}

.team-join {
  margin-top: 64px;
  padding: 48px;
  text-align: center;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background: linear-gradient(135deg, rgba(0, 212, 255, 0.06), rgba(124, 58, 237, 0.06));
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 16px;
}

/* === Category pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 10px;
}

.pill {
  position: relative;
  padding: 8px 20px;
  border: 1px solid var(--border);
  border-radius: 999px;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  overflow: hidden;
  transition: color var(--transition-normal), border-color var(--transition-normal);
}

.pill:hover {
  color: var(--text-primary);
}

.pill.selected {
  color: var(--void);
  border-color: transparent;
}

.pill-highlight {
  position: absolute;
  inset: 0;
  background: var(--gradient);
  border-radius: inherit;
}

.pill-label {
  position: relative;
  z-index: 1;
}

/* === Projects === */
.projects-layout {
  display: grid;
  grid-template-columns: 380px 1fr;
  gap: 32px;
  align-items: start;
}

.project-list {
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.project-tab {
  width: 100%;
  display: flex;
  align-items: center;
  gap: 14px;
  padding: 16px 18px;
  text-align: left;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  transition: border-color var(--transition-normal), background var(--transition-normal);
}

.project-tab:hover {
  background: var(--surface-hover);
}

.project-tab.active {
  border-color: var(--card-accent, var(--primary));
  box-shadow: 0 0 30px -10px var(--card-glow, var(--primary-glow));
}

.project-tab-glyph {
  font-size: var(--text-xl);
  color: var(--card-accent, var(--primary));
}

.project-tab-text {
  display: flex;
  flex-direction: column;
  flex: 1;
  min-width: 0;
}

.project-tab-status,
.status-badge {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  padding: 2px 10px;
  border-radius: 999px;
  border: 1px solid var(--border-strong);
  color: var(--text-muted);
  white-space: nowrap;
}

.project-detail {
  padding: 36px;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background: var(--surface);
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.project-detail-header {
  display: flex;
  align-items: center;
  gap: 18px;
}

.project-detail-glyph {
  font-size: var(--text-2xl);
  color: var(--card-accent, var(--primary));
}

.project-detail-title {
  font-size: var(--text-xl);
}

.project-detail-subtitle {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.project-detail-header .status-badge {
  margin-left: auto;
}

.project-detail-description {
  color: var(--text-secondary);
}

.project-detail-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.project-features {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 8px;
}

.project-stack {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.tech-chip {
  padding: 4px 12px;
  border-radius: 999px;
  background: var(--surface-hover);
  font-family: var(--font-mono);
  font-size: var(--text-xs);
}

/* === Tech stack === */
.tech-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: 16px;
  margin-top: 40px;
}

.tech-grid .magnetic {
  display: block;
}

.tech-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 8px;
  padding: 24px 16px;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  transition: border-color var(--transition-normal);
}

.tech-tile:hover {
  border-color: var(--primary);
}

.tech-glyph {
  font-size: var(--text-2xl);
}

.tech-name {
  font-weight: 600;
}

.tech-category {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 48px;
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: 28px;
}

.contact-detail {
  display: flex;
  gap: 16px;
}

.contact-detail p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.contact-glyph {
  display: grid;
  place-items: center;
  flex-shrink: 0;
  width: 44px;
  height: 44px;
  border-radius: 12px;
  background: var(--primary-glow);
  color: var(--primary);
}

.contact-socials,
.footer-socials {
  display: flex;
  flex-wrap: wrap;
  gap: 12px;
}

.social-link {
  padding: 6px 14px;
  border: 1px solid var(--border);
  border-radius: 999px;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.social-link:hover {
  color: var(--primary);
  border-color: var(--primary);
}

.contact-form {
  padding: 36px;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background: var(--surface);
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 20px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.input-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 12px 16px;
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
  background: rgba(0, 0, 0, 0.3);
  color: var(--text-primary);
  font: inherit;
  font-size: var(--text-sm);
  outline: none;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-glow);
}

.input-field:disabled {
  opacity: 0.6;
}

.input-field.textarea {
  min-height: 140px;
  resize: vertical;
}

.contact-submit {
  align-self: flex-start;
}

/* === Toasts === */
.toast-host {
  position: fixed;
  right: 24px;
  bottom: 24px;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 12px;
  max-width: 380px;
}

.toast {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 14px 16px;
  border-radius: var(--radius);
  border: 1px solid var(--border-strong);
  background: rgba(10, 10, 18, 0.95);
  backdrop-filter: blur(12px);
  animation: toast-in 300ms ease-out;
}

.toast--success {
  border-color: var(--green);
  box-shadow: 0 0 24px -8px var(--green-glow);
}

.toast--error {
  border-color: var(--danger);
  box-shadow: 0 0 24px -8px var(--danger-glow);
}

.toast-message {
  flex: 1;
  font-size: var(--text-sm);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Cursor glow === */
.glowing-cursor {
  position: fixed;
  top: 0;
  left: 0;
  width: 200px;
  height: 200px;
  border-radius: 50%;
  background: radial-gradient(circle, var(--primary-glow) 0%, transparent 70%);
  pointer-events: none;
  z-index: 1;
  mix-blend-mode: screen;
  transition: opacity var(--transition-normal);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  background: var(--void-lighter);
}

.footer-inner {
  max-width: 1240px;
  margin: 0 auto;
  padding: 64px 24px 40px;
  display: grid;
  grid-template-columns: 1.6fr repeat(3, 1fr);
  gap: 40px;
}

.footer-brand {
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.footer-brand p {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.footer-column h4 {
  margin-bottom: 16px;
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.footer-column ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.footer-column a {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.footer-column a:hover {
  color: var(--primary);
}

.footer-bottom {
  max-width: 1240px;
  margin: 0 auto;
  padding: 24px;
  border-top: 1px solid var(--border);
  display: flex;
  justify-content: space-between;
  gap: 16px;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.footer-bottom a {
  color: var(--primary);
}

/* === Responsive === */
@media (max-width: 1080px) {
  .sector-grid,
  .team-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .about-body,
  .projects-layout,
  .contact-layout {
    grid-template-columns: 1fr;
  }

  .footer-inner {
    grid-template-columns: 1fr 1fr;
  }
}

@media (max-width: 640px) {
  .feature-grid,
  .sector-grid,
  .team-grid,
  .form-row,
  .project-features {
    grid-template-columns: 1fr;
  }

  .hero-stats {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .section {
    padding: 80px 20px;
  }

  .footer-bottom {
    flex-direction: column;
  }
}

@media (prefers-reduced-motion: reduce) {
  .binary-column,
  .hero-badge-dot,
  .scroll-indicator-dot {
    animation: none;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::GLOBAL_STYLES;

    #[test]
    fn stylesheet_covers_runtime_state_classes() {
        for selector in [
            ".navbar--scrolled",
            ".navbar-mobile.open",
            ".pill.selected",
            ".project-tab.active",
            ".toast--success",
            ".toast--error",
            ".glowing-cursor",
            ".accent-secondary",
        ] {
            assert!(GLOBAL_STYLES.contains(selector), "missing {selector}");
        }
    }
}

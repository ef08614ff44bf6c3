//! Global CSS styles for Folio.
//!
//! Class names are part of the page contract: `nav-open` on the page root,
//! `hide` on filtered-out project items, `active` on the selected filter
//! button and the open lightbox, `invalid` on failing form fields.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #fafaf8;
  --surface: #ffffff;
  --border: #e4e4e0;
  --text-primary: #1b1b1b;
  --text-muted: #6b6b6b;
  --accent: #2f6f5e;
  --accent-soft: rgba(47, 111, 94, 0.12);
  --danger: #c0392b;
  --overlay: rgba(10, 10, 10, 0.88);

  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --radius: 6px;
  --header-height: 64px;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

.page {
  min-height: 100vh;
  outline: none;
}

/* === Header & Navigation === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  padding: 0 2rem;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}

.site-logo {
  font-weight: 700;
  color: var(--text-primary);
  text-decoration: none;
}

.main-nav ul {
  display: flex;
  gap: 1.5rem;
  margin: 0;
  padding: 0;
  list-style: none;
}

.main-nav a {
  color: var(--text-muted);
  text-decoration: none;
}

.main-nav a:hover { color: var(--accent); }

.nav-toggle {
  display: none;
  width: 40px;
  height: 40px;
  border: none;
  background: transparent;
  cursor: pointer;
}

.hamburger,
.hamburger::before,
.hamburger::after {
  display: block;
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  position: relative;
}

.hamburger::before,
.hamburger::after {
  content: '';
  position: absolute;
}

.hamburger::before { top: -7px; }
.hamburger::after { top: 7px; }

@media (max-width: 768px) {
  .nav-toggle { display: block; }

  .main-nav {
    position: fixed;
    top: var(--header-height);
    left: 0;
    right: 0;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
    transform: translateY(-120%);
    transition: transform 0.25s ease;
  }

  .main-nav ul {
    flex-direction: column;
    padding: 1rem 2rem;
  }

  .nav-open .main-nav { transform: translateY(0); }
}

/* === Hero === */
.hero {
  padding: 5rem 2rem 3rem;
  text-align: center;
}

.hero-title {
  margin: 0;
  font-size: 3rem;
}

.hero-tagline {
  color: var(--text-muted);
  font-size: 1.25rem;
}

/* === Projects === */
.projects,
.contact {
  max-width: 1100px;
  margin: 0 auto;
  padding: 3rem 2rem;
}

.section-title {
  margin-top: 0;
  font-size: 1.75rem;
}

.filter-buttons {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.filter-btn {
  padding: 0.4rem 1rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--surface);
  color: var(--text-muted);
  cursor: pointer;
}

.filter-btn.active {
  border-color: var(--accent);
  background: var(--accent-soft);
  color: var(--accent);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.project-item {
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
}

.project-item.hide { display: none; }

.project-item img {
  display: block;
  width: 100%;
  aspect-ratio: 3 / 2;
  object-fit: cover;
  cursor: zoom-in;
}

.project-info { padding: 0.75rem 1rem; }

.project-info h3 { margin: 0; font-size: 1.05rem; }

.project-category {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: none;
  align-items: center;
  justify-content: center;
  background: var(--overlay);
}

.lightbox.active { display: flex; }

.lightbox img {
  max-width: 90vw;
  max-height: 85vh;
  border-radius: var(--radius);
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5);
}

.lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1.5rem;
  border: none;
  background: transparent;
  color: #fff;
  font-size: 2.5rem;
  line-height: 1;
  cursor: pointer;
}

/* === Contact Form === */
#contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 560px;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.form-label { font-weight: 600; }

.form-input {
  padding: 0.6rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  font: inherit;
}

.form-input:focus {
  outline: none;
  border-color: var(--accent);
}

.form-input.invalid { border-color: var(--danger); }

.error-message {
  min-height: 1.2em;
  color: var(--danger);
  font-size: 0.85rem;
}

.btn-primary {
  align-self: flex-start;
  padding: 0.6rem 1.5rem;
  border: none;
  border-radius: var(--radius);
  background: var(--accent);
  color: #fff;
  font: inherit;
  cursor: pointer;
}

.site-footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
}
"#;

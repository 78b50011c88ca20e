pub const SECTION_STYLES: &str = r#"
/* Header and navigation */
.app-header {
  background-color: var(--surface-glass);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  background: none;
  border: none;
  cursor: pointer;
}

.logo-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: #FFFFFF;
  font-weight: 700;
}

.logo-name {
  font-weight: 700;
  font-size: 1.1rem;
}

.nav-links {
  display: flex;
  gap: var(--space-1);
}

.nav-link {
  border: none;
  background: none;
  cursor: pointer;
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-full);
  transition: color var(--transition-fast) var(--easing-standard),
    background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-glass);
}

.nav-link.active {
  color: #FFFFFF;
  background-color: var(--primary);
  box-shadow: var(--shadow-glow);
}

/* Page transition shell */
.page-content {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
  perspective: 1200px;
  overflow-x: hidden;
}

.page-shell {
  transform-style: preserve-3d;
}

.page-enter {
  animation: page-enter var(--page-duration) var(--easing-page) both;
}

.page-exit {
  animation: page-exit var(--page-duration) var(--easing-page) both;
}

@keyframes page-enter {
  from {
    opacity: 0;
    transform: scale(0.8) rotateY(-90deg);
  }
  to {
    opacity: 1;
    transform: scale(1) rotateY(0);
  }
}

@keyframes page-exit {
  from {
    opacity: 1;
    transform: scale(1) rotateY(0);
  }
  to {
    opacity: 0;
    transform: scale(1.2) rotateY(90deg);
  }
}

/* Section scaffolding */
.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-heading {
  font-size: clamp(2.25rem, 6vw, 3.5rem);
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-subtitle {
  color: var(--text-secondary);
  max-width: 640px;
  margin: 0 auto;
  font-size: 1.1rem;
}

.section-cta {
  text-align: center;
  margin-top: var(--space-12);
}

.coming-soon h1 {
  font-size: 2.25rem;
}

.error-state {
  flex-direction: column;
  gap: var(--space-2);
  text-align: center;
}

.error-detail {
  color: var(--text-tertiary);
}

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
}

.hero-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
  align-items: center;
  width: 100%;
}

@media (min-width: 1024px) {
  .hero-grid {
    grid-template-columns: 1fr 1fr;
  }
}

.hero-title {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-weight: 700;
  line-height: 1.1;
}

.hero-role {
  font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
  font-size: 1.5rem;
  color: var(--text-secondary);
  margin-top: var(--space-4);
}

.hero-tagline {
  color: var(--text-secondary);
  font-size: 1.1rem;
  max-width: 560px;
  margin-top: var(--space-6);
  line-height: 1.7;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.hero-socials {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface-glass);
  color: var(--text-primary);
  transition: box-shadow var(--transition-fast) var(--easing-standard),
    transform var(--transition-fast) var(--easing-standard);
}

.social-link:hover {
  text-decoration: none;
  transform: translateY(-2px) scale(1.05);
  box-shadow: var(--shadow-glow);
}

.scroll-cue {
  position: absolute;
  bottom: var(--space-6);
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-tertiary);
  animation: bob 2s var(--easing-standard) infinite;
}

@keyframes bob {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 8px); }
}

/* Decorative floating shapes */
.hero-backdrop {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.shape {
  position: absolute;
  border-radius: var(--radius-xl);
  opacity: 0.25;
  animation: float 6s ease-in-out infinite;
}

.shape-1 { width: 80px; height: 80px; top: 15%; left: 60%; background: var(--accent-purple); }
.shape-2 { width: 56px; height: 56px; top: 40%; left: 80%; background: var(--primary); border-radius: var(--radius-full); animation-delay: 1s; }
.shape-3 { width: 64px; height: 64px; top: 70%; left: 65%; background: var(--accent-cyan); animation-delay: 2s; }
.shape-4 { width: 40px; height: 40px; top: 25%; left: 88%; background: var(--warning); animation-delay: 3s; }
.shape-5 { width: 48px; height: 48px; top: 60%; left: 85%; background: var(--error); border-radius: var(--radius-full); animation-delay: 4s; }

@keyframes float {
  0%, 100% { transform: translateY(0) rotate(0deg); }
  50% { transform: translateY(-24px) rotate(10deg); }
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
  align-items: start;
}

@media (min-width: 1024px) {
  .about-grid {
    grid-template-columns: 1fr 1fr;
  }
}

.info-row {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-2) 0;
  color: var(--text-secondary);
}

.tech-badges {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.achievement-card {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.achievement-icon {
  font-size: 2rem;
}

.achievement-list {
  display: grid;
  gap: var(--space-4);
}

/* Skills */
.skill-filters {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-10);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-4);
}

.skill-card-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-3);
}

.skill-name {
  font-weight: 600;
}

.skill-category {
  color: var(--text-tertiary);
  font-size: 0.8rem;
}

.skill-bar {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--border);
  overflow: hidden;
}

.skill-bar-fill {
  height: 100%;
  border-radius: var(--radius-full);
  transition: width 1.5s var(--easing-standard);
}

.skill-level {
  color: var(--text-tertiary);
  font-size: 0.85rem;
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  transition: transform var(--transition-normal) var(--easing-standard),
    border-color var(--transition-normal) var(--easing-standard),
    box-shadow var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: translateY(-8px);
  border-color: var(--primary);
  box-shadow: var(--shadow-lg);
}

.project-card-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-2);
}

.project-title {
  font-size: 1.15rem;
  font-weight: 600;
}

.project-links {
  display: flex;
  gap: var(--space-2);
}

.icon-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

.icon-link:hover {
  text-decoration: none;
  background-color: var(--primary);
  color: #FFFFFF;
}

.project-description {
  color: var(--text-secondary);
  flex: 1;
}

.project-stats {
  display: flex;
  gap: var(--space-4);
  color: var(--text-tertiary);
  font-size: 0.9rem;
}

.project-language {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.9rem;
}

.language-dot {
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
}

.project-topics {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-1);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-12);
  align-items: start;
}

@media (min-width: 1024px) {
  .contact-grid {
    grid-template-columns: 1fr 1fr;
  }
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-4);
}

@media (min-width: 640px) {
  .form-row {
    grid-template-columns: 1fr 1fr;
  }
}

.form-success {
  text-align: center;
  padding: var(--space-12) 0;
}

.form-success-mark {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 64px;
  height: 64px;
  margin: 0 auto var(--space-4);
  border-radius: var(--radius-full);
  background-color: rgba(16, 185, 129, 0.2);
  color: var(--success);
  font-size: 2rem;
}

.contact-aside {
  display: grid;
  gap: var(--space-6);
}

.contact-aside .info-row a {
  color: var(--text-primary);
  font-weight: 500;
}

.contact-aside .info-row a:hover {
  color: var(--primary);
}

.info-label {
  color: var(--text-tertiary);
  font-size: 0.85rem;
}

.contact-socials {
  display: flex;
  gap: var(--space-4);
}

.quick-actions {
  display: grid;
  gap: var(--space-3);
}

/* Resume */
.resume-actions {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.resume-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-6);
}

@media (min-width: 1024px) {
  .resume-grid {
    grid-template-columns: 2fr 1fr;
  }
}

.resume-column {
  display: grid;
  gap: var(--space-6);
  align-content: start;
}

.timeline-entry {
  border-left: 2px solid var(--primary);
  padding-left: var(--space-4);
  margin-bottom: var(--space-6);
}

.timeline-entry:last-child {
  margin-bottom: 0;
}

.timeline-meta {
  color: var(--text-tertiary);
  font-size: 0.85rem;
}

.timeline-detail {
  color: var(--text-secondary);
  margin-top: var(--space-2);
}

.skill-group {
  margin-bottom: var(--space-4);
}

.skill-group:last-child {
  margin-bottom: 0;
}

.skill-group-name {
  font-weight: 600;
  margin-bottom: var(--space-2);
}

/* Footer */
.app-footer {
  border-top: 1px solid var(--border);
  background-color: var(--surface);
  margin-top: var(--space-16);
}

.footer-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-12) var(--space-4);
}

@media (min-width: 768px) {
  .footer-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.footer-heading {
  font-weight: 600;
  margin-bottom: var(--space-3);
}

.footer-blurb {
  color: var(--text-secondary);
}

.footer-links {
  display: grid;
  gap: var(--space-2);
  justify-items: start;
}

.footer-link {
  border: none;
  background: none;
  cursor: pointer;
  color: var(--text-secondary);
}

.footer-link:hover {
  color: var(--primary);
}

.footer-socials {
  display: flex;
  gap: var(--space-3);
}

.footer-bottom {
  text-align: center;
  color: var(--text-tertiary);
  padding: var(--space-4);
  border-top: 1px solid var(--border);
  font-size: 0.9rem;
}
"#;

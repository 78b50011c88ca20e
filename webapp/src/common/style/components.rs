pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: 1px solid transparent;
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  background: none;
  color: var(--text-primary);
  transition: background-color var(--transition-fast) var(--easing-standard),
    box-shadow var(--transition-fast) var(--easing-standard),
    transform var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  transform: translateY(-1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: wait;
  transform: none;
}

.btn-primary {
  background-color: var(--primary);
  color: #FFFFFF;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  box-shadow: var(--shadow-glow);
}

.btn-outline {
  border-color: var(--border);
  background-color: transparent;
}

.btn-outline:hover {
  border-color: var(--primary);
  color: var(--primary);
}

.btn-ghost {
  background-color: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
  background-color: var(--surface-glass);
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.05rem;
}

.btn-block {
  width: 100%;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

.glass {
  background-color: var(--surface-glass);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

/* Badges */
.badge {
  display: inline-block;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--surface-glass);
  border: 1px solid var(--border);
  color: var(--text-secondary);
  font-size: 0.75rem;
}

.badge-outline {
  background-color: transparent;
}

/* Forms */
.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.form-field label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus {
  outline: none;
  border-color: var(--border-focus);
}

.form-input-invalid {
  border-color: var(--error);
}

.form-input-invalid:focus {
  border-color: var(--error);
}

textarea.form-input {
  min-height: 120px;
  resize: none;
}

.form-error {
  color: var(--error);
  font-size: 0.875rem;
}

.form-notice {
  padding: var(--space-3);
  border-radius: var(--radius-md);
  background-color: rgba(239, 68, 68, 0.1);
  color: var(--error);
  font-size: 0.9rem;
}

/* Text helpers */
.gradient-text {
  background: linear-gradient(120deg, var(--primary), var(--accent-purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.full-height {
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  justify-content: center;
}

/* Loading */
.skeleton {
  background: linear-gradient(90deg, var(--border) 25%, var(--surface) 50%, var(--border) 75%);
  background-size: 200% 100%;
  animation: skeleton-shimmer 1.5s infinite;
  border-radius: var(--radius-md);
}

@keyframes skeleton-shimmer {
  from { background-position: 200% 0; }
  to { background-position: -200% 0; }
}

.spinner {
  width: 32px;
  height: 32px;
  border: 2px solid var(--primary);
  border-top-color: transparent;
  border-radius: var(--radius-full);
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
